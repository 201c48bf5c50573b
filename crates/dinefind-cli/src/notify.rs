use dinefind_sources::Notifier;

/// Prints fetch failures to stderr, the terminal stand-in for a toast.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn error(&self, message: &str) {
        tracing::debug!(notification = message, "showing error notification");
        eprintln!("error: {message}");
    }
}

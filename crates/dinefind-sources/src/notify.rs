//! One-way error notifications raised when a fetch fails.

/// Fire-and-forget side channel for user-visible fetch failures.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

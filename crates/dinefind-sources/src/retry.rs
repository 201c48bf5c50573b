//! Retry policy for listing-source requests.
//!
//! Transient failures (HTTP 429, 5xx, transport errors) are retried with
//! exponential backoff. Everything else propagates immediately. With
//! `max_retries = 0` the operation runs exactly once.

use std::future::Future;
use std::time::Duration;

use crate::error::SourceError;

/// Returns `true` if `err` represents a transient condition worth retrying.
///
/// Retriable errors:
/// - [`SourceError::RateLimited`]: HTTP 429.
/// - [`SourceError::UnexpectedStatus`] with a 5xx status. Overpass answers
///   504 when its query slots are full.
/// - [`SourceError::Http`]: connection reset, timeout, TLS failure.
fn is_retriable(err: &SourceError) -> bool {
    match err {
        SourceError::RateLimited { .. } | SourceError::Http(_) => true,
        SourceError::UnexpectedStatus { status, .. } => *status >= 500,
        _ => false,
    }
}

/// Executes `operation`, sleeping `backoff_base_secs * 2^attempt` seconds
/// between attempts, for at most `max_retries` additional attempts after the
/// first. The last error is returned once retries are exhausted.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, SourceError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SourceError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if !is_retriable(&err) || attempt >= max_retries {
            return Err(err);
        }

        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient source error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}

// src/application/deadline.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::{future::Future, time::Duration};

/// Runs `work` under the configured per-call timeout.
///
/// On expiry the future is dropped, which cancels whatever query it was
/// awaiting, and the call fails with `Internal`.
pub(crate) async fn within<T, F>(timeout: Duration, work: F) -> DomainResult<T>
where
    F: Future<Output = DomainResult<T>>,
{
    match tokio::time::timeout(timeout, work).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout_ms = timeout.as_millis(), "usecase deadline exceeded");
            Err(DomainError::internal(format!(
                "request timed out after {}ms",
                timeout.as_millis()
            )))
        }
    }
}

//! Connect loop: attempt until success, fatal policy outcome, or cancellation.

use std::future::Future;

use tokio::time::Instant;

use super::error::ConnectError;
use super::policy::{ErrorKind, Outcome, ReconnectPolicy, RetryState};
use crate::control::CancelToken;

/// Runs `connect` until it succeeds or the policy returns a fatal outcome.
/// On a transient failure, sleeps for the backoff delay then tries again.
/// The cancel token is checked before every attempt.
pub async fn connect_with_retry<T, E, F, Fut, C>(
    policy: &ReconnectPolicy,
    cancel: &CancelToken,
    mut connect: F,
    classify: C,
) -> Result<T, ConnectError<E>>
where
    E: std::error::Error + 'static,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    C: Fn(&E) -> ErrorKind,
{
    let started = Instant::now();
    let mut state = RetryState::new();
    loop {
        if cancel.is_cancelled() {
            tracing::info!(attempts = state.attempts, "connect cancelled");
            return Err(ConnectError::Cancelled {
                attempts: state.attempts,
            });
        }

        let err = match connect().await {
            Ok(conn) => {
                if state.attempts > 0 {
                    tracing::info!(attempts = state.attempts, "connected after retrying");
                }
                return Ok(conn);
            }
            Err(e) => e,
        };

        state.record_failure(classify(&err), started.elapsed());
        match policy.decide(&state) {
            Outcome::Fatal(reason) => {
                tracing::error!(
                    attempt = state.attempts,
                    elapsed_ms = state.elapsed.as_millis() as u64,
                    error = %err,
                    "giving up: {}",
                    reason
                );
                return Err(ConnectError::Fatal {
                    reason,
                    attempts: state.attempts,
                    source: err,
                });
            }
            Outcome::WaitThenRetry(delay) => {
                tracing::warn!(
                    attempt = state.attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "connect failed, retrying"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

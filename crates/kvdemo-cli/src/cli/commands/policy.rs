//! `kvdemo policy` – evaluate the reconnect policy offline.

use std::time::Duration;

use clap::ValueEnum;

use kvdemo_core::retry::{ErrorKind, Outcome, ReconnectPolicy, RetryState};

/// One-line description of the decision for `state`.
pub fn describe_decision(policy: &ReconnectPolicy, state: &RetryState) -> String {
    let verdict = match policy.decide(state) {
        Outcome::Fatal(reason) => format!("fatal: {reason}"),
        Outcome::WaitThenRetry(delay) => format!("wait {}ms then retry", delay.as_millis()),
    };
    format!(
        "attempts={} elapsed={}ms last_error={:?} -> {}",
        state.attempts,
        state.elapsed.as_millis(),
        state.last_error,
        verdict
    )
}

/// `--last-error` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LastError {
    /// The server refused the connection.
    Refused,
    /// Any other transport failure.
    Transport,
    /// No failure recorded.
    None,
}

impl From<LastError> for ErrorKind {
    fn from(e: LastError) -> Self {
        match e {
            LastError::Refused => ErrorKind::ConnectionRefused,
            LastError::Transport => ErrorKind::Transport,
            LastError::None => ErrorKind::None,
        }
    }
}

pub fn run_policy(policy: &ReconnectPolicy, attempts: u32, elapsed_ms: u64, last_error: LastError) {
    let state = RetryState {
        attempts,
        elapsed: Duration::from_millis(elapsed_ms),
        last_error: last_error.into(),
    };
    println!("{}", describe_decision(policy, &state));
}

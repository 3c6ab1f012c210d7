use std::time::Duration;

/// Classification of the last failed connection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorKind {
    /// The server actively refused the connection.
    ConnectionRefused,
    /// Any other transport failure (timeout, reset, DNS, handshake).
    Transport,
    /// No error recorded yet.
    #[default]
    None,
}

/// Accumulated history of a connection sequence.
///
/// Created when a connection sequence begins, updated after every failed
/// attempt, discarded on success or fatal abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetryState {
    /// Number of failed attempts so far.
    pub attempts: u32,
    /// Time spent in the sequence so far, including sleeps.
    pub elapsed: Duration,
    pub last_error: ErrorKind,
}

impl RetryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one failed attempt. `elapsed` is measured from the start of the
    /// sequence; it never moves backwards.
    pub fn record_failure(&mut self, kind: ErrorKind, elapsed: Duration) {
        self.attempts = self.attempts.saturating_add(1);
        self.elapsed = self.elapsed.max(elapsed);
        self.last_error = kind;
    }
}

/// Why a connection sequence was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FatalReason {
    #[error("server refused connection")]
    ConnectionRefused,
    #[error("retry time exhausted")]
    RetryTimeExhausted,
    #[error("max retry attempts reached")]
    MaxAttemptsReached,
}

/// Decision returned by the reconnect policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Stop retrying permanently.
    Fatal(FatalReason),
    /// Pause for the given delay, then attempt again.
    WaitThenRetry(Duration),
}

/// Linear backoff with a hard stop on refusal, total time and attempt count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    /// Attempts beyond this count are fatal.
    pub max_attempts: u32,
    /// Elapsed retry time beyond this is fatal.
    pub max_elapsed: Duration,
    /// Backoff grows by this much per attempt.
    pub step: Duration,
    /// Upper bound on a single backoff delay.
    pub max_delay: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            max_elapsed: Duration::from_millis(3_600_000),
            step: Duration::from_millis(100),
            max_delay: Duration::from_millis(3000),
        }
    }
}

impl ReconnectPolicy {
    /// Decide what to do after a failed attempt. Rules are checked in order:
    /// refusal, elapsed time, attempt count, then backoff.
    pub fn decide(&self, state: &RetryState) -> Outcome {
        if state.last_error == ErrorKind::ConnectionRefused {
            return Outcome::Fatal(FatalReason::ConnectionRefused);
        }
        if state.elapsed > self.max_elapsed {
            return Outcome::Fatal(FatalReason::RetryTimeExhausted);
        }
        if state.attempts > self.max_attempts {
            return Outcome::Fatal(FatalReason::MaxAttemptsReached);
        }
        Outcome::WaitThenRetry(self.backoff(state.attempts))
    }

    /// `min(attempts * step, max_delay)`.
    pub fn backoff(&self, attempts: u32) -> Duration {
        self.step.saturating_mul(attempts).min(self.max_delay)
    }
}

/// Evaluate the default policy.
pub fn decide(state: &RetryState) -> Outcome {
    ReconnectPolicy::default().decide(state)
}

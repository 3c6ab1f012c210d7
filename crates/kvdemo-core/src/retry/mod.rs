//! Reconnect policy.
//!
//! A pure decision function over the history of a connection sequence
//! (attempt count, elapsed time, last error kind), plus the classification
//! and driver loop that feed it. The store facade shares this so every
//! connect path applies the same rules.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify_io_error, classify_redis_error};
pub use error::ConnectError;
pub use policy::{decide, ErrorKind, FatalReason, Outcome, ReconnectPolicy, RetryState};
pub use run::connect_with_retry;

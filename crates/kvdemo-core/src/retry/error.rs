//! Terminal connection failures.

use super::policy::FatalReason;

/// Returned when a connection sequence ends without a connection.
/// `E` is the error of the last attempt.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError<E: std::error::Error + 'static> {
    /// The policy gave up; no further automatic retry.
    #[error("{reason} after {attempts} attempt(s)")]
    Fatal {
        reason: FatalReason,
        attempts: u32,
        #[source]
        source: E,
    },
    /// The caller cancelled between attempts.
    #[error("connect cancelled after {attempts} attempt(s)")]
    Cancelled { attempts: u32 },
}

impl<E: std::error::Error + 'static> ConnectError<E> {
    /// Fatal reason, if the policy gave up.
    pub fn reason(&self) -> Option<FatalReason> {
        match self {
            ConnectError::Fatal { reason, .. } => Some(*reason),
            ConnectError::Cancelled { .. } => None,
        }
    }

    pub fn attempts(&self) -> u32 {
        match self {
            ConnectError::Fatal { attempts, .. } | ConnectError::Cancelled { attempts } => {
                *attempts
            }
        }
    }
}

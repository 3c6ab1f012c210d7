//! Errors surfaced by the store facade.

use super::status::ConnectionStatus;
use crate::retry::{ConnectError, FatalReason};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Host/port/credentials could not form a connection URL.
    #[error("invalid connection settings: {0}")]
    Config(String),
    /// The redis client rejected the URL.
    #[error("cannot open client for {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: redis::RedisError,
    },
    /// The connect sequence ended without a connection.
    #[error("connect to {url} failed")]
    Connect {
        url: String,
        #[source]
        source: ConnectError<redis::RedisError>,
    },
    #[error("not connected (status: {0})")]
    NotConnected(ConnectionStatus),
    #[error("{command} failed")]
    Command {
        command: &'static str,
        #[source]
        source: redis::RedisError,
    },
}

impl StoreError {
    /// The policy's reason for giving up, when this is a fatal connect failure.
    pub fn fatal_reason(&self) -> Option<FatalReason> {
        match self {
            StoreError::Connect { source, .. } => source.reason(),
            _ => None,
        }
    }
}

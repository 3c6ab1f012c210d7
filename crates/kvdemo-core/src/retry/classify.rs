//! Classify connection errors into reconnect policy error kinds.

use super::policy::ErrorKind;
use std::io;

/// Classify a redis client error. Only an explicit refusal is singled out;
/// every other failure during connect is a transport error.
pub fn classify_redis_error(e: &redis::RedisError) -> ErrorKind {
    if e.is_connection_refusal() {
        ErrorKind::ConnectionRefused
    } else {
        ErrorKind::Transport
    }
}

/// Classify a raw I/O error.
pub fn classify_io_error(e: &io::Error) -> ErrorKind {
    match e.kind() {
        io::ErrorKind::ConnectionRefused => ErrorKind::ConnectionRefused,
        _ => ErrorKind::Transport,
    }
}

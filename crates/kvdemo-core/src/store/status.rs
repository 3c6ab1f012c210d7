use std::fmt;

/// Connection state of a [`super::StoreClient`]. Only the client changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// No connection yet, or dropped by `disconnect` or a broken link.
    #[default]
    Disconnected,
    /// A connect sequence is running.
    Connecting,
    Connected,
    /// The last connect sequence ended with a fatal outcome or was cancelled.
    Failed,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

use std::io;
use std::time::Duration;

use redis::aio::MultiplexedConnection;
use redis::RedisResult;

use super::error::StoreError;
use super::status::ConnectionStatus;
use crate::config::StoreConfig;
use crate::control::CancelToken;
use crate::retry::{classify_redis_error, connect_with_retry, ReconnectPolicy};

/// Connection manager and command facade for one logical connection.
pub struct StoreClient {
    client: redis::Client,
    conn: Option<MultiplexedConnection>,
    status: ConnectionStatus,
    policy: ReconnectPolicy,
    connect_timeout: Duration,
    /// Connection URL with the password masked.
    url: String,
}

impl StoreClient {
    /// Build a client from config without connecting.
    pub fn new(cfg: &StoreConfig) -> Result<Self, StoreError> {
        let url = cfg
            .connection_url()
            .map_err(|e| StoreError::Config(format!("{e:#}")))?;
        let redacted = cfg.redacted_url();
        let client = redis::Client::open(url.as_str()).map_err(|source| StoreError::InvalidUrl {
            url: redacted.clone(),
            source,
        })?;
        Ok(Self {
            client,
            conn: None,
            status: ConnectionStatus::Disconnected,
            policy: cfg.reconnect_policy(),
            connect_timeout: cfg.connect_timeout(),
            url: redacted,
        })
    }

    /// Build a client and connect it.
    pub async fn open(cfg: &StoreConfig, cancel: &CancelToken) -> Result<Self, StoreError> {
        let mut client = Self::new(cfg)?;
        client.connect(cancel).await?;
        Ok(client)
    }

    /// Connect under the reconnect policy. No-op when already connected.
    ///
    /// An attempt counts as successful only once the server answers `PING`
    /// within the connect timeout.
    pub async fn connect(&mut self, cancel: &CancelToken) -> Result<(), StoreError> {
        if self.conn.is_some() {
            return Ok(());
        }
        self.status = ConnectionStatus::Connecting;
        tracing::info!(url = %self.url, "connecting");

        let client = &self.client;
        let timeout = self.connect_timeout;
        let result = connect_with_retry(
            &self.policy,
            cancel,
            move || async move {
                match tokio::time::timeout(timeout, open_and_ping(client)).await {
                    Ok(res) => res,
                    Err(_) => Err(redis::RedisError::from(io::Error::new(
                        io::ErrorKind::TimedOut,
                        "connect timed out",
                    ))),
                }
            },
            classify_redis_error,
        )
        .await;

        match result {
            Ok(conn) => {
                self.conn = Some(conn);
                self.status = ConnectionStatus::Connected;
                tracing::info!(url = %self.url, "connected");
                Ok(())
            }
            Err(source) => {
                self.status = ConnectionStatus::Failed;
                Err(StoreError::Connect {
                    url: self.url.clone(),
                    source,
                })
            }
        }
    }

    /// Drop the connection.
    pub fn disconnect(&mut self) {
        if self.conn.take().is_some() {
            tracing::info!(url = %self.url, "disconnected");
        }
        self.status = ConnectionStatus::Disconnected;
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    /// Masked connection URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub(super) fn conn(&mut self) -> Result<&mut MultiplexedConnection, StoreError> {
        let status = self.status;
        self.conn.as_mut().ok_or(StoreError::NotConnected(status))
    }

    /// Log a failed command and wrap it. A broken link marks the client disconnected.
    pub(super) fn finish<T>(
        &mut self,
        command: &'static str,
        res: RedisResult<T>,
    ) -> Result<T, StoreError> {
        match res {
            Ok(v) => Ok(v),
            Err(source) => {
                tracing::warn!(command, error = %source, "command failed");
                if source.is_connection_dropped() || source.is_io_error() {
                    self.conn = None;
                    self.status = ConnectionStatus::Disconnected;
                }
                Err(StoreError::Command { command, source })
            }
        }
    }
}

/// One connect attempt: handshake, then `PING`.
async fn open_and_ping(client: &redis::Client) -> RedisResult<MultiplexedConnection> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    let _pong: String = redis::cmd("PING").query_async(&mut conn).await?;
    Ok(conn)
}

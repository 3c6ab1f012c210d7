//! Server and keyspace commands.

use redis::{AsyncCommands, RedisResult};

use super::{StoreClient, StoreError};

impl StoreClient {
    /// `PING`; returns the server reply (normally `PONG`).
    pub async fn ping(&mut self) -> Result<String, StoreError> {
        let res: RedisResult<String> = redis::cmd("PING").query_async(self.conn()?).await;
        let reply = self.finish("PING", res)?;
        tracing::debug!(%reply, "PING");
        Ok(reply)
    }

    /// `KEYS pattern`, sorted. Scans the whole keyspace; meant for demos and small databases.
    pub async fn keys(&mut self, pattern: &str) -> Result<Vec<String>, StoreError> {
        let res: RedisResult<Vec<String>> = self.conn()?.keys(pattern).await;
        let mut keys = self.finish("KEYS", res)?;
        keys.sort();
        tracing::debug!(pattern, count = keys.len(), "KEYS");
        Ok(keys)
    }

    /// Number of keys in the selected database.
    pub async fn dbsize(&mut self) -> Result<usize, StoreError> {
        let res: RedisResult<usize> = redis::cmd("DBSIZE").query_async(self.conn()?).await;
        let size = self.finish("DBSIZE", res)?;
        tracing::debug!(size, "DBSIZE");
        Ok(size)
    }

    /// Remove every key in the selected database.
    pub async fn flushdb(&mut self) -> Result<(), StoreError> {
        let res: RedisResult<()> = redis::cmd("FLUSHDB").query_async(self.conn()?).await;
        self.finish("FLUSHDB", res)?;
        tracing::info!(url = %self.url(), "FLUSHDB");
        Ok(())
    }
}

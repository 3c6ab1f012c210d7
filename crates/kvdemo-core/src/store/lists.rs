//! List commands.

use redis::{AsyncCommands, RedisResult};

use super::{StoreClient, StoreError};

impl StoreClient {
    /// `LPUSH key value...`; returns the new list length.
    pub async fn lpush(&mut self, key: &str, values: &[&str]) -> Result<usize, StoreError> {
        let res: RedisResult<usize> = self.conn()?.lpush(key, values).await;
        let len = self.finish("LPUSH", res)?;
        tracing::debug!(key, pushed = values.len(), len, "LPUSH");
        Ok(len)
    }

    /// `RPUSH key value...`; returns the new list length.
    pub async fn rpush(&mut self, key: &str, values: &[&str]) -> Result<usize, StoreError> {
        let res: RedisResult<usize> = self.conn()?.rpush(key, values).await;
        let len = self.finish("RPUSH", res)?;
        tracing::debug!(key, pushed = values.len(), len, "RPUSH");
        Ok(len)
    }

    pub async fn lpop(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        let res: RedisResult<Option<String>> = self.conn()?.lpop(key, None).await;
        let value = self.finish("LPOP", res)?;
        tracing::debug!(key, found = value.is_some(), "LPOP");
        Ok(value)
    }

    pub async fn rpop(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        let res: RedisResult<Option<String>> = self.conn()?.rpop(key, None).await;
        let value = self.finish("RPOP", res)?;
        tracing::debug!(key, found = value.is_some(), "RPOP");
        Ok(value)
    }

    /// `LRANGE key start stop`; negative indexes count from the tail.
    pub async fn lrange(
        &mut self,
        key: &str,
        start: isize,
        stop: isize,
    ) -> Result<Vec<String>, StoreError> {
        let res: RedisResult<Vec<String>> = self.conn()?.lrange(key, start, stop).await;
        let items = self.finish("LRANGE", res)?;
        tracing::debug!(key, start, stop, items = items.len(), "LRANGE");
        Ok(items)
    }

    pub async fn llen(&mut self, key: &str) -> Result<usize, StoreError> {
        let res: RedisResult<usize> = self.conn()?.llen(key).await;
        let len = self.finish("LLEN", res)?;
        tracing::debug!(key, len, "LLEN");
        Ok(len)
    }
}

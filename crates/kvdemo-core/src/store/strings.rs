//! String commands.

use redis::{AsyncCommands, RedisResult};

use super::{StoreClient, StoreError};

impl StoreClient {
    /// `SET key value`.
    pub async fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let res: RedisResult<()> = self.conn()?.set(key, value).await;
        self.finish("SET", res)?;
        tracing::debug!(key, "SET");
        Ok(())
    }

    /// `SET key value EX seconds`.
    pub async fn set_ex(&mut self, key: &str, value: &str, seconds: u64) -> Result<(), StoreError> {
        let res: RedisResult<()> = self.conn()?.set_ex(key, value, seconds).await;
        self.finish("SETEX", res)?;
        tracing::debug!(key, seconds, "SETEX");
        Ok(())
    }

    /// `GET key`; `None` when the key is missing.
    pub async fn get(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        let res: RedisResult<Option<String>> = self.conn()?.get(key).await;
        let value = self.finish("GET", res)?;
        tracing::debug!(key, found = value.is_some(), "GET");
        Ok(value)
    }

    /// `DEL key...`; returns how many keys were removed.
    pub async fn del(&mut self, keys: &[&str]) -> Result<usize, StoreError> {
        if keys.is_empty() {
            return Ok(0);
        }
        let res: RedisResult<usize> = self.conn()?.del(keys).await;
        let removed = self.finish("DEL", res)?;
        tracing::debug!(?keys, removed, "DEL");
        Ok(removed)
    }

    pub async fn exists(&mut self, key: &str) -> Result<bool, StoreError> {
        let res: RedisResult<bool> = self.conn()?.exists(key).await;
        let found = self.finish("EXISTS", res)?;
        tracing::debug!(key, found, "EXISTS");
        Ok(found)
    }

    /// `INCRBY key delta`; returns the new value.
    pub async fn incr_by(&mut self, key: &str, delta: i64) -> Result<i64, StoreError> {
        let res: RedisResult<i64> = self.conn()?.incr(key, delta).await;
        let value = self.finish("INCRBY", res)?;
        tracing::debug!(key, delta, value, "INCRBY");
        Ok(value)
    }

    /// `APPEND key value`; returns the new length.
    pub async fn append(&mut self, key: &str, value: &str) -> Result<usize, StoreError> {
        let res: RedisResult<usize> = self.conn()?.append(key, value).await;
        let len = self.finish("APPEND", res)?;
        tracing::debug!(key, len, "APPEND");
        Ok(len)
    }

    /// `EXPIRE key seconds`; false when the key does not exist.
    pub async fn expire(&mut self, key: &str, seconds: i64) -> Result<bool, StoreError> {
        let res: RedisResult<bool> = self.conn()?.expire(key, seconds).await;
        let set = self.finish("EXPIRE", res)?;
        tracing::debug!(key, seconds, set, "EXPIRE");
        Ok(set)
    }

    /// `TTL key`: seconds left, -1 without expiry, -2 when missing.
    pub async fn ttl(&mut self, key: &str) -> Result<i64, StoreError> {
        let res: RedisResult<i64> = self.conn()?.ttl(key).await;
        let ttl = self.finish("TTL", res)?;
        tracing::debug!(key, ttl, "TTL");
        Ok(ttl)
    }
}

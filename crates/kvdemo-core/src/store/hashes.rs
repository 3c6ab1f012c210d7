//! Hash commands.

use std::collections::BTreeMap;

use redis::{AsyncCommands, RedisResult};

use super::{StoreClient, StoreError};

impl StoreClient {
    /// `HSET key field value`; true when the field is new.
    pub async fn hset(&mut self, key: &str, field: &str, value: &str) -> Result<bool, StoreError> {
        let res: RedisResult<usize> = self.conn()?.hset(key, field, value).await;
        let added = self.finish("HSET", res)? > 0;
        tracing::debug!(key, field, added, "HSET");
        Ok(added)
    }

    /// `HSET key field value [field value ...]`.
    pub async fn hset_multiple(
        &mut self,
        key: &str,
        items: &[(&str, &str)],
    ) -> Result<(), StoreError> {
        if items.is_empty() {
            return Ok(());
        }
        let res: RedisResult<()> = self.conn()?.hset_multiple(key, items).await;
        self.finish("HSET", res)?;
        tracing::debug!(key, fields = items.len(), "HSET multiple");
        Ok(())
    }

    pub async fn hget(&mut self, key: &str, field: &str) -> Result<Option<String>, StoreError> {
        let res: RedisResult<Option<String>> = self.conn()?.hget(key, field).await;
        let value = self.finish("HGET", res)?;
        tracing::debug!(key, field, found = value.is_some(), "HGET");
        Ok(value)
    }

    /// `HGETALL key`, ordered by field name. Empty when the key is missing.
    pub async fn hgetall(&mut self, key: &str) -> Result<BTreeMap<String, String>, StoreError> {
        let res: RedisResult<BTreeMap<String, String>> = self.conn()?.hgetall(key).await;
        let fields = self.finish("HGETALL", res)?;
        tracing::debug!(key, fields = fields.len(), "HGETALL");
        Ok(fields)
    }

    /// `HDEL key field`; true when the field existed.
    pub async fn hdel(&mut self, key: &str, field: &str) -> Result<bool, StoreError> {
        let res: RedisResult<usize> = self.conn()?.hdel(key, field).await;
        let removed = self.finish("HDEL", res)? > 0;
        tracing::debug!(key, field, removed, "HDEL");
        Ok(removed)
    }

    pub async fn hexists(&mut self, key: &str, field: &str) -> Result<bool, StoreError> {
        let res: RedisResult<bool> = self.conn()?.hexists(key, field).await;
        let found = self.finish("HEXISTS", res)?;
        tracing::debug!(key, field, found, "HEXISTS");
        Ok(found)
    }
}

//! Redis Cache Backend
//!
//! Issues `SET key value EX secs` over a multiplexed tokio connection.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use tracing::debug;

use crate::cache::{ttl_seconds, CacheClient};
use crate::error::Result;

/// Redis-backed cache client.
///
/// The multiplexed connection is cheap to clone and safe to share across
/// tasks; each call works on its own clone.
#[derive(Clone)]
pub struct RedisCache {
    conn: MultiplexedConnection,
}

impl RedisCache {
    /// Opens a connection to the server at `redis_url`.
    pub async fn connect(redis_url: impl AsRef<str>) -> Result<Self> {
        let client = redis::Client::open(redis_url.as_ref())?;
        let conn = client.get_multiplexed_tokio_connection().await?;
        Ok(Self { conn })
    }
}

/// Builds `SET key value EX secs`.
fn set_ex_cmd(key: &str, value: &str, secs: u64) -> redis::Cmd {
    let mut cmd = redis::cmd("SET");
    cmd.arg(key).arg(value).arg("EX").arg(secs);
    cmd
}

#[async_trait]
impl CacheClient for RedisCache {
    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let secs = ttl_seconds(ttl)?;
        let mut conn = self.conn.clone();

        set_ex_cmd(key, value, secs)
            .query_async::<_, ()>(&mut conn)
            .await?;

        debug!(key, ttl_secs = secs, "SET EX issued");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value = redis::cmd("GET")
            .arg(key)
            .query_async::<_, Option<String>>(&mut conn)
            .await?;
        Ok(value)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

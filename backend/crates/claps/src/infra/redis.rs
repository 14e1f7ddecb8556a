//! Redis Repository Implementation
//!
//! One sorted set per resource key:
//!
//! ```text
//! CLAP:{key}   member = base64 sha256(ip), score = claps of that visitor
//! ```
//!
//! `ZINCRBY` is the only write and is atomic per member. Reads use
//! `ZRANGE key 0 -1 WITHSCORES`; scores come back as doubles and are
//! narrowed with [`whole_claps`].

use crate::domain::entities::ScoreEntry;
use crate::domain::repository::ScoreRepository;
use crate::domain::services::whole_claps;
use crate::domain::value_objects::{ResourceKey, VisitorId};
use crate::error::ClapResult;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

/// Redis-backed score repository
///
/// `ConnectionManager` multiplexes a single connection and reconnects on
/// failure; clones share it.
#[derive(Clone)]
pub struct RedisScoreRepository {
    conn: ConnectionManager,
}

impl RedisScoreRepository {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// Open a client for `redis_url` and wrap it in a connection manager
    pub async fn connect(redis_url: &str) -> ClapResult<Self> {
        let client = redis::Client::open(redis_url)?;
        let conn = client.get_connection_manager().await?;

        tracing::info!("Connected to redis");

        Ok(Self::new(conn))
    }

    /// Round-trip check, used at startup
    pub async fn ping(&self) -> ClapResult<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

impl ScoreRepository for RedisScoreRepository {
    async fn read_all(&self, key: &ResourceKey) -> ClapResult<Vec<ScoreEntry>> {
        let mut conn = self.conn.clone();
        let raw: Vec<(String, f64)> = conn.zrange_withscores(key.as_str(), 0, -1).await?;

        Ok(raw
            .into_iter()
            .map(|(member, score)| ScoreEntry::new(member, whole_claps(score)))
            .collect())
    }

    async fn increment(&self, key: &ResourceKey, member: &VisitorId, delta: u64) -> ClapResult<()> {
        let mut conn = self.conn.clone();
        let new_score: f64 = conn.zincr(key.as_str(), member.as_str(), delta).await?;

        tracing::debug!(key = %key, visitor = %member, new_score, "ZINCRBY");

        Ok(())
    }
}

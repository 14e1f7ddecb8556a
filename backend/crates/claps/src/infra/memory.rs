//! In-memory Repository Implementation
//!
//! Process-local sorted sets. Used by tests and for running without Redis;
//! nothing survives a restart.

use crate::domain::entities::ScoreEntry;
use crate::domain::repository::ScoreRepository;
use crate::domain::value_objects::{ResourceKey, VisitorId};
use crate::error::ClapResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

type SortedSets = HashMap<String, HashMap<String, u64>>;

/// In-memory score repository. Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryScoreRepository {
    sets: Arc<Mutex<SortedSets>>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreRepository for InMemoryScoreRepository {
    async fn read_all(&self, key: &ResourceKey) -> ClapResult<Vec<ScoreEntry>> {
        let sets = self.sets.lock().await;

        let entries = sets
            .get(key.as_str())
            .map(|set| {
                set.iter()
                    .map(|(member, score)| ScoreEntry::new(member.clone(), *score))
                    .collect()
            })
            .unwrap_or_default();

        Ok(entries)
    }

    async fn increment(&self, key: &ResourceKey, member: &VisitorId, delta: u64) -> ClapResult<()> {
        let mut sets = self.sets.lock().await;

        let score = sets
            .entry(key.as_str().to_string())
            .or_default()
            .entry(member.as_str().to_string())
            .or_insert(0);
        *score = score.saturating_add(delta);

        Ok(())
    }
}

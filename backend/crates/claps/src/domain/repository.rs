//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::ScoreEntry;
use crate::domain::value_objects::{ResourceKey, VisitorId};
use crate::error::ClapResult;

/// Sorted-set score store
#[trait_variant::make(ScoreRepository: Send)]
pub trait LocalScoreRepository {
    /// All (member, score) entries of a key, empty if the key is absent.
    /// Order is unspecified.
    async fn read_all(&self, key: &ResourceKey) -> ClapResult<Vec<ScoreEntry>>;

    /// Atomically add `delta` to `member`'s score, creating the entry if absent
    async fn increment(&self, key: &ResourceKey, member: &VisitorId, delta: u64) -> ClapResult<()>;
}

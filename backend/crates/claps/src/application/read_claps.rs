//! Read Claps Use Case

use crate::domain::entities::ClapStats;
use crate::domain::repository::ScoreRepository;
use crate::domain::services::aggregate;
use crate::domain::value_objects::{ResourceKey, VisitorId};
use crate::error::ClapResult;
use std::sync::Arc;

/// Read Claps Use Case
pub struct ReadClapsUseCase<R>
where
    R: ScoreRepository,
{
    score_repo: Arc<R>,
}

impl<R> ReadClapsUseCase<R>
where
    R: ScoreRepository,
{
    pub fn new(score_repo: Arc<R>) -> Self {
        Self { score_repo }
    }

    /// Current aggregates of `key` for `visitor`. No mutation.
    pub async fn execute(&self, key: &ResourceKey, visitor: &VisitorId) -> ClapResult<ClapStats> {
        let entries = self.score_repo.read_all(key).await?;
        Ok(aggregate(&entries, visitor))
    }
}

//! Add Claps Use Case
//!
//! Sequential protocol: read current score, decide against the cap, increment,
//! re-read. The steps are not isolated from concurrent writers; the final
//! read reports whatever the store holds at that moment.

use crate::application::config::ClapConfig;
use crate::domain::entities::ClapStats;
use crate::domain::repository::ScoreRepository;
use crate::domain::services::{ClapDecision, aggregate, decide};
use crate::domain::value_objects::{ResourceKey, VisitorId};
use crate::error::{ClapError, ClapResult};
use std::sync::Arc;

/// Input DTO for add claps
#[derive(Debug, Clone)]
pub struct AddClapsInput {
    pub key: ResourceKey,
    pub visitor: VisitorId,
    /// Already coerced, non-negative
    pub requested: u64,
}

/// Output DTO for add claps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddClapsOutput {
    pub stats: ClapStats,
    pub max_claps: u64,
}

/// Add Claps Use Case
pub struct AddClapsUseCase<R>
where
    R: ScoreRepository,
{
    score_repo: Arc<R>,
    config: Arc<ClapConfig>,
}

impl<R> AddClapsUseCase<R>
where
    R: ScoreRepository,
{
    pub fn new(score_repo: Arc<R>, config: Arc<ClapConfig>) -> Self {
        Self { score_repo, config }
    }

    pub async fn execute(&self, input: AddClapsInput) -> ClapResult<AddClapsOutput> {
        let max_claps = self.config.max_claps;

        let current = self.read(&input.key, &input.visitor).await?;

        let delta = match decide(current.user_score, input.requested, max_claps) {
            ClapDecision::Capped => {
                return Err(ClapError::CapReached {
                    user_score: current.user_score,
                    max_claps,
                });
            }
            ClapDecision::Apply(delta) => delta,
        };

        if delta > 0 {
            self.score_repo
                .increment(&input.key, &input.visitor, delta)
                .await?;

            tracing::info!(
                key = %input.key,
                visitor = %input.visitor,
                requested = input.requested,
                delta,
                "Claps added"
            );
        }

        let stats = self.read(&input.key, &input.visitor).await?;

        Ok(AddClapsOutput { stats, max_claps })
    }

    async fn read(&self, key: &ResourceKey, visitor: &VisitorId) -> ClapResult<ClapStats> {
        let entries = self.score_repo.read_all(key).await?;
        Ok(aggregate(&entries, visitor))
    }
}

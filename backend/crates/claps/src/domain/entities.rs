//! Domain Entities
//!
//! Core business entities for the claps domain.

/// One (member, score) pair of a key's sorted set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Hashed visitor identity
    pub member: String,
    /// Accumulated claps of that visitor
    pub score: u64,
}

impl ScoreEntry {
    pub fn new(member: impl Into<String>, score: u64) -> Self {
        Self {
            member: member.into(),
            score,
        }
    }
}

/// Aggregate statistics of one key as seen by one visitor
///
/// Computed fresh per request, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClapStats {
    /// Sum of every visitor's score
    pub total_score: u64,
    /// Score of the requesting visitor, 0 if unseen
    pub user_score: u64,
    /// Number of visitors with an entry
    pub total_users: u64,
}

//! Domain Services
//!
//! Pure domain logic: aggregation over a key's entries and the per-visitor cap.

use crate::domain::entities::{ClapStats, ScoreEntry};
use crate::domain::value_objects::VisitorId;

/// Aggregate a key's entries from the point of view of `visitor`
///
/// Single pass, order independent for `total_score` and `total_users`.
/// The store keeps one entry per member; should a member still appear twice,
/// the last one wins for `user_score`.
pub fn aggregate(entries: &[ScoreEntry], visitor: &VisitorId) -> ClapStats {
    let mut stats = ClapStats::default();

    for entry in entries {
        if entry.member == visitor.as_str() {
            stats.user_score = entry.score;
        }
        stats.total_score = stats.total_score.saturating_add(entry.score);
    }

    stats.total_users = entries.len() as u64;
    stats
}

/// Outcome of applying the cap to a requested increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClapDecision {
    /// Visitor already holds `max_claps`, nothing may be added
    Capped,
    /// Add this many claps (may be 0)
    Apply(u64),
}

/// Decide how many of `requested` claps a visitor at `user_score` may add
///
/// After applying the returned delta the visitor never exceeds `max_claps`.
pub fn decide(user_score: u64, requested: u64, max_claps: u64) -> ClapDecision {
    if user_score >= max_claps {
        return ClapDecision::Capped;
    }

    let room = max_claps - user_score;
    ClapDecision::Apply(requested.min(room))
}

/// Whole, non-negative number of claps from a float
///
/// Non-finite and non-positive values are 0, fractions are truncated,
/// values past `u64::MAX` saturate.
pub fn whole_claps(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.trunc() as u64
}

//! API DTOs (Data Transfer Objects)

use crate::domain::entities::ClapStats;
use crate::domain::services::whole_claps;
use serde::Serialize;
use serde_json::Value;

/// Query string shared by GET and PATCH /api/claps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClapsQuery {
    pub key: Option<String>,
}

impl ClapsQuery {
    /// Build from the decoded query pairs. A repeated `key` keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let key = pairs
            .into_iter()
            .find(|(name, _)| name == "key")
            .map(|(_, value)| value);

        Self { key }
    }
}

/// Request body for PATCH /api/claps
///
/// `score` is taken as-is and coerced later; a malformed value never fails
/// the request.
#[derive(Debug, Clone, Default)]
pub struct AddClapsRequest {
    pub score: Value,
}

impl AddClapsRequest {
    /// Parse a raw body. Empty, non-JSON or non-object bodies mean "no claps".
    /// A repeated `score` field keeps its last value.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut fields)) => Self {
                score: fields.remove("score").unwrap_or_default(),
            },
            _ => Self::default(),
        }
    }

    pub fn requested(&self) -> u64 {
        coerce_delta(&self.score)
    }
}

/// Requested increment from an arbitrary JSON value
///
/// Numbers and numeric strings count, truncated toward zero; negatives,
/// garbage, `null` and containers are 0. `true` counts as 1.
/// Hex literals and `"Infinity"` are not numbers here and count as 0.
pub fn coerce_delta(value: &Value) -> u64 {
    match value {
        Value::Number(n) => match n.as_u64() {
            Some(v) => v,
            None => n.as_f64().map(whole_claps).unwrap_or(0),
        },
        Value::String(s) => s.trim().parse::<f64>().map(whole_claps).unwrap_or(0),
        Value::Bool(true) => 1,
        _ => 0,
    }
}

/// Response for GET /api/claps
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClapsResponse {
    pub total_score: u64,
    pub user_score: u64,
    pub total_users: u64,
}

impl From<ClapStats> for ClapsResponse {
    fn from(stats: ClapStats) -> Self {
        Self {
            total_score: stats.total_score,
            user_score: stats.user_score,
            total_users: stats.total_users,
        }
    }
}

/// Response for PATCH /api/claps
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddClapsResponse {
    pub total_score: u64,
    pub user_score: u64,
    pub total_users: u64,
    pub max_claps: u64,
}

impl AddClapsResponse {
    pub fn new(stats: ClapStats, max_claps: u64) -> Self {
        Self {
            total_score: stats.total_score,
            user_score: stats.user_score,
            total_users: stats.total_users,
            max_claps,
        }
    }
}

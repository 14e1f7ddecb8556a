//! Claps (per-resource like counter) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Visitor identity, key resolution, aggregation, cap rule
//! - `application/` - Read / add claps use cases
//! - `infra/` - Redis and in-memory sorted-set stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Scoring Model
//! - Each resource key is one sorted set: member = hashed client address, score = claps
//! - A visitor's score for a key never exceeds `max_claps` (default 10)
//! - Aggregates are recomputed from the store on every request, nothing is cached
//! - The store's atomic increment is the only synchronization point

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ClapConfig;
pub use error::{ClapError, ClapResult};
pub use infra::memory::InMemoryScoreRepository;
pub use infra::redis::RedisScoreRepository;
pub use presentation::router::{claps_router, claps_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (ScoreEntry, ClapStats)
//! - Domain value objects (VisitorId, ResourceKey, RequestUrl)
//! - Domain services (aggregation, cap decision)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod add_claps;
pub mod config;
pub mod read_claps;

pub use add_claps::{AddClapsInput, AddClapsOutput, AddClapsUseCase};
pub use read_claps::ReadClapsUseCase;

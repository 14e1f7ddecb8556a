//! Infrastructure Layer
//!
//! Score store implementations.

pub mod memory;
pub mod redis;

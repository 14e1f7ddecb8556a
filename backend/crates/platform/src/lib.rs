//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, Base64)
//! - Client address extraction from request headers
pub mod client;
pub mod crypto;

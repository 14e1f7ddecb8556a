//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate holds the error vocabulary every backend crate agrees on:
//! - [`error::kind::ErrorKind`] classifies failures and maps them to HTTP statuses
//! - [`error::app_error::AppError`] carries a user-facing message plus an optional source
//! - with the `axum` feature, `AppError` renders as RFC 7807 problem JSON

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}

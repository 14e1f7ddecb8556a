//! Clap Error Types
//!
//! This module provides clap-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use thiserror::Error;

/// Message returned to a visitor whose allowance is used up
pub const CAP_REACHED_MESSAGE: &str = "You have reached the maximum number of claps";

/// Message returned for every server-side failure
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Clap-specific result type alias
pub type ClapResult<T> = Result<T, ClapError>;

/// Clap-specific error variants
#[derive(Debug, Error)]
pub enum ClapError {
    /// The visitor already holds `max_claps` for this key. Business outcome, not a fault.
    #[error("Clap cap reached ({user_score}/{max_claps})")]
    CapReached { user_score: u64, max_claps: u64 },

    /// Backing sorted-set store failed or timed out
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] redis::RedisError),
}

impl ClapError {
    /// Convert to AppError (403 when capped, 500 otherwise). Server-side details stay out of the message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            ClapError::CapReached { .. } => AppError::forbidden(CAP_REACHED_MESSAGE),
            ClapError::StoreUnavailable(_) => AppError::internal(GENERIC_FAILURE_MESSAGE),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ClapError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "Clap store error");
            }
            ClapError::CapReached {
                user_score,
                max_claps,
            } => {
                tracing::debug!(user_score, max_claps, "Clap rejected, cap reached");
            }
        }
    }
}

impl From<ClapError> for AppError {
    fn from(err: ClapError) -> Self {
        let app_err = err.to_app_error();
        app_err.with_source(err)
    }
}

impl IntoResponse for ClapError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

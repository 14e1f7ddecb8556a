//! Claps Router

use crate::application::config::ClapConfig;
use crate::domain::repository::ScoreRepository;
use crate::infra::redis::RedisScoreRepository;
use crate::presentation::handlers::{self, ClapAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the claps router with the Redis repository
pub fn claps_router(repo: RedisScoreRepository, config: ClapConfig) -> Router {
    claps_router_generic(repo, config)
}

/// Create a generic claps router for any repository implementation
pub fn claps_router_generic<R>(repo: R, config: ClapConfig) -> Router
where
    R: ScoreRepository + Clone + Send + Sync + 'static,
{
    let state = ClapAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::get_claps::<R>)
                .patch(handlers::add_claps::<R>)
                .post(handlers::add_claps::<R>),
        )
        .with_state(state)
}

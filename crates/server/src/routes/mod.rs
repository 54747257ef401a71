//! Route handlers

pub mod health;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// All widget routes, without middleware
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(task::router())
}

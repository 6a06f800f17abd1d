//! Axum router wiring.
//!
//! Exposes the commit webhook and a liveness endpoint.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, webhook};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(webhook::handle_commit))
        .route("/health", get(webhook::health))
        .with_state(state)
}

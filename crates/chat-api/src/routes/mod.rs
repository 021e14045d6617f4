//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, messages, participants, status};
use crate::state::AppState;

/// Create the main router with all chat routes (health routes are separate)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route(
            "/participants",
            post(participants::join).get(participants::list_participants),
        )
        .route(
            "/messages",
            post(messages::send_message).get(messages::list_messages),
        )
        .route("/status", post(status::heartbeat))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

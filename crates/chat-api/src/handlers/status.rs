//! Heartbeat handler

use axum::{extract::State, http::StatusCode};

use crate::extractors::ParticipantIdentity;
use crate::response::ApiResult;
use crate::state::AppState;

/// Refresh the caller's heartbeat
///
/// POST /status
pub async fn heartbeat(
    State(state): State<AppState>,
    identity: ParticipantIdentity,
) -> ApiResult<StatusCode> {
    state.chat().heartbeat(identity.as_str()).await?;
    Ok(StatusCode::OK)
}

//! Participant handlers
//!
//! Endpoints for joining and listing who is present.

use axum::{extract::State, http::StatusCode, Json};
use chat_service::dto::{JoinRequest, ParticipantResponse};

use crate::extractors::ChatJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Join the room
///
/// POST /participants
pub async fn join(
    State(state): State<AppState>,
    ChatJson(request): ChatJson<JoinRequest>,
) -> ApiResult<StatusCode> {
    state.chat().join(request).await?;
    Ok(StatusCode::CREATED)
}

/// List present participants
///
/// GET /participants
pub async fn list_participants(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ParticipantResponse>>> {
    let participants = state.chat().list_participants().await?;
    Ok(Json(participants))
}

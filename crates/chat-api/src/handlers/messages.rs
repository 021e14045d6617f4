//! Message handlers
//!
//! Endpoints for sending and polling messages.

use axum::{extract::State, http::StatusCode, Json};
use chat_service::dto::{MessageResponse, SendMessageRequest};

use crate::extractors::{ChatJson, LimitParam, ParticipantIdentity};
use crate::response::ApiResult;
use crate::state::AppState;

/// Send a message as the caller
///
/// POST /messages
pub async fn send_message(
    State(state): State<AppState>,
    identity: ParticipantIdentity,
    ChatJson(request): ChatJson<SendMessageRequest>,
) -> ApiResult<StatusCode> {
    state
        .chat()
        .send_message(identity.as_str(), request)
        .await?;
    Ok(StatusCode::CREATED)
}

/// Messages visible to the caller
///
/// GET /messages?limit=N
pub async fn list_messages(
    State(state): State<AppState>,
    identity: ParticipantIdentity,
    limit: LimitParam,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let messages = state
        .chat()
        .list_messages(identity.as_str(), limit.as_deref())
        .await?;
    Ok(Json(messages))
}

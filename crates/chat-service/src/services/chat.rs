//! Chat orchestrator
//!
//! The five operations the transport calls. Each one validates its payload,
//! then delegates to the presence or message service. Handlers do nothing
//! beyond extracting inputs and mapping the result.

use tracing::instrument;

use crate::dto::{
    parse_limit, JoinRequest, MessageResponse, ParticipantResponse, SendMessageRequest,
    ValidatedPayload,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::message::MessageService;
use super::presence::PresenceService;

/// Chat orchestrator
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    /// Create a new ChatService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Join the room
    #[instrument(skip(self, request))]
    pub async fn join(&self, request: JoinRequest) -> ServiceResult<ParticipantResponse> {
        request.check()?;

        let participant = PresenceService::new(self.ctx).join(request.name()).await?;
        Ok(participant.into())
    }

    /// Everyone currently present
    #[instrument(skip(self))]
    pub async fn list_participants(&self) -> ServiceResult<Vec<ParticipantResponse>> {
        let participants = PresenceService::new(self.ctx).list().await?;
        Ok(participants.into_iter().map(Into::into).collect())
    }

    /// Send a message as `from`
    ///
    /// `from` is the caller's identity; any sender in the payload is ignored.
    #[instrument(skip(self, request))]
    pub async fn send_message(
        &self,
        from: &str,
        request: SendMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        request.check()?;
        let message_type = request.message_type().ok_or_else(|| {
            ServiceError::validation("\"type\" must be one of [message, private_message]")
        })?;

        let message = MessageService::new(self.ctx)
            .send(from, request.to(), request.text(), message_type)
            .await?;
        Ok(message.into())
    }

    /// Messages `viewer` may see, with an optional raw `limit` value
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        viewer: &str,
        limit: Option<&str>,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let limit = parse_limit(limit)?;

        let messages = MessageService::new(self.ctx).list_for(viewer, limit).await?;
        Ok(messages.into_iter().map(Into::into).collect())
    }

    /// Refresh `name`'s heartbeat
    #[instrument(skip(self))]
    pub async fn heartbeat(&self, name: &str) -> ServiceResult<()> {
        PresenceService::new(self.ctx).heartbeat(name).await
    }

    /// Whether the store answers
    pub async fn store_ready(&self) -> bool {
        self.ctx.participant_repo().ping().await.is_ok()
    }
}

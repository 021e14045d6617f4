//! Presence service
//!
//! Participant records: join, heartbeat, listing, and presence checks.

use tracing::{debug, error, info, instrument};

use chat_core::entities::{format_message_time, Message, Participant};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Presence service
pub struct PresenceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PresenceService<'a> {
    /// Create a new PresenceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a participant and record its join notice
    ///
    /// The participant row and the status message succeed or fail
    /// together: if the notice cannot be written the row is deleted again.
    #[instrument(skip(self))]
    pub async fn join(&self, name: &str) -> ServiceResult<Participant> {
        let now = self.ctx.clock().now();
        let participant = Participant::new(name, now);

        self.ctx.participant_repo().create(&participant).await?;

        let notice = Message::joined(name, format_message_time(now));
        if let Err(e) = self.ctx.message_repo().create(&notice).await {
            error!(name, error = %e, "Failed to record join notice, rolling back");
            if let Err(undo) = self.ctx.participant_repo().delete(name).await {
                error!(name, error = %undo, "Failed to roll back participant");
            }
            return Err(ServiceError::internal(format!(
                "failed to record join of {name}: {e}"
            )));
        }

        info!(name, "Participant joined");
        Ok(participant)
    }

    /// Refresh a participant's heartbeat
    #[instrument(skip(self))]
    pub async fn heartbeat(&self, name: &str) -> ServiceResult<()> {
        let now = self.ctx.clock().now().timestamp_millis();

        if !self.ctx.participant_repo().touch(name, now).await? {
            return Err(ServiceError::not_found("Participant", name));
        }

        debug!(name, "Heartbeat refreshed");
        Ok(())
    }

    /// All present participants
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<Participant>> {
        Ok(self.ctx.participant_repo().list().await?)
    }

    /// Whether `name` is currently present
    pub async fn exists(&self, name: &str) -> ServiceResult<bool> {
        Ok(self.ctx.participant_repo().find_by_name(name).await?.is_some())
    }
}

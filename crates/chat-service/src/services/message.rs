//! Message service
//!
//! Appends participant messages and reads them back per viewer.

use tracing::{debug, instrument, warn};

use chat_core::entities::{format_message_time, Message, MessageType};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::presence::PresenceService;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a message from `from`
    ///
    /// The sender must be present at submission time. The `time` field is
    /// stamped here, never taken from the caller.
    #[instrument(skip(self, text))]
    pub async fn send(
        &self,
        from: &str,
        to: &str,
        text: &str,
        message_type: MessageType,
    ) -> ServiceResult<Message> {
        if !PresenceService::new(self.ctx).exists(from).await? {
            warn!(from, "Message from a participant who is not present");
            return Err(ServiceError::unauthorized(format!(
                "participant {from:?} is not present"
            )));
        }

        let time = format_message_time(self.ctx.clock().now());
        let message = Message::new(from, to, text, message_type, time);
        self.ctx.message_repo().create(&message).await?;

        debug!(from, to, kind = %message_type, "Message stored");
        Ok(message)
    }

    /// Messages visible to `viewer`, oldest first
    ///
    /// With a limit, the newest `limit` visible messages.
    #[instrument(skip(self))]
    pub async fn list_for(&self, viewer: &str, limit: Option<usize>) -> ServiceResult<Vec<Message>> {
        Ok(self.ctx.message_repo().find_visible(viewer, limit).await?)
    }
}

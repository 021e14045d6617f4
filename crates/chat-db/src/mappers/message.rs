//! Message entity <-> model mapper

use chat_core::entities::{Message, MessageType};
use chat_core::error::DomainError;

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
///
/// Fails only if the row holds a kind the schema should have rejected.
impl TryFrom<MessageModel> for Message {
    type Error = DomainError;

    fn try_from(model: MessageModel) -> Result<Self, Self::Error> {
        let message_type = model.kind.parse::<MessageType>().map_err(|e| {
            DomainError::DatabaseError(format!("message {}: {e}", model.id))
        })?;

        Ok(Message {
            from: model.sender,
            to: model.recipient,
            text: model.text,
            message_type,
            time: model.time,
        })
    }
}

/// Column values for inserting a Message
pub struct MessageInsert<'a> {
    pub sender: &'a str,
    pub recipient: &'a str,
    pub text: &'a str,
    pub kind: &'static str,
    pub time: &'a str,
}

impl<'a> MessageInsert<'a> {
    pub fn new(message: &'a Message) -> Self {
        Self {
            sender: &message.from,
            recipient: &message.to,
            text: &message.text,
            kind: message.message_type.as_str(),
            time: &message.time,
        }
    }
}

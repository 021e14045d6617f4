//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chat_core::entities::{Message, Participant};

use super::responses::{MessageResponse, ParticipantResponse};

impl From<&Participant> for ParticipantResponse {
    fn from(participant: &Participant) -> Self {
        Self {
            name: participant.name.clone(),
            last_heartbeat: participant.last_heartbeat,
        }
    }
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self {
            name: participant.name,
            last_heartbeat: participant.last_heartbeat,
        }
    }
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self::from(message.clone())
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            from: message.from,
            to: message.to,
            text: message.text,
            message_type: message.message_type,
            time: message.time,
        }
    }
}

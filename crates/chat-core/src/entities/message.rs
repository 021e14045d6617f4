//! Message entity - public, private, and status chat events

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reserved recipient addressing everyone
pub const BROADCAST_RECIPIENT: &str = "Todos";

/// Status text recorded when a participant joins
pub const JOIN_TEXT: &str = "entra na sala...";

/// Status text recorded when a participant is evicted
pub const LEAVE_TEXT: &str = "sai da sala...";

/// Kind of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Public message, visible to everyone
    Message,
    /// Directed message, visible to sender and recipient
    PrivateMessage,
    /// System-generated join/leave notice
    Status,
}

impl MessageType {
    /// Wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::PrivateMessage => "private_message",
            Self::Status => "status",
        }
    }

    /// Whether participants may submit messages of this type
    #[inline]
    pub fn is_user_submittable(&self) -> bool {
        matches!(self, Self::Message | Self::PrivateMessage)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown message type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message type: {0}")]
pub struct ParseMessageTypeError(pub String);

impl FromStr for MessageType {
    type Err = ParseMessageTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(Self::Message),
            "private_message" => Ok(Self::PrivateMessage),
            "status" => Ok(Self::Status),
            other => Err(ParseMessageTypeError(other.to_string())),
        }
    }
}

/// Message entity
///
/// Messages are append-only; nothing mutates a stored message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub text: String,
    pub message_type: MessageType,
    /// Wall-clock time of insertion, `HH:MM:SS`
    pub time: String,
}

impl Message {
    /// Create a new Message
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        text: impl Into<String>,
        message_type: MessageType,
        time: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            text: text.into(),
            message_type,
            time: time.into(),
        }
    }

    /// Status notice for a participant entering the room
    pub fn joined(name: impl Into<String>, time: impl Into<String>) -> Self {
        Self::new(name, BROADCAST_RECIPIENT, JOIN_TEXT, MessageType::Status, time)
    }

    /// Status notice for a participant removed for inactivity
    pub fn departed(name: impl Into<String>, time: impl Into<String>) -> Self {
        Self::new(name, BROADCAST_RECIPIENT, LEAVE_TEXT, MessageType::Status, time)
    }

    /// Check if message is addressed to everyone
    #[inline]
    pub fn is_broadcast(&self) -> bool {
        self.to == BROADCAST_RECIPIENT
    }

    /// Check whether `viewer` may see this message
    pub fn is_visible_to(&self, viewer: &str) -> bool {
        crate::visibility::is_visible_to(self, viewer)
    }
}

/// Format a timestamp the way message `time` fields are stored
///
/// Always `HH:MM:SS` in UTC, never the host's local zone.
pub fn format_message_time(at: DateTime<Utc>) -> String {
    at.format("%H:%M:%S").to_string()
}

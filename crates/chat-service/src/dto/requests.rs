//! Request DTOs for API endpoints
//!
//! Fields are read as raw JSON values. A missing field, a field of the
//! wrong JSON type, and an empty string are all reported by validation,
//! together with every other failure, rather than as a deserialization
//! error at the first bad field.

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

use chat_core::entities::MessageType;

use super::validation::ValidatedPayload;

// ============================================================================
// Participant Requests
// ============================================================================

/// Join request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct JoinRequest {
    #[validate(
        required(message = "\"name\" is required"),
        custom(function = "validate_name")
    )]
    pub name: Option<Value>,
}

impl JoinRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(Value::String(name.into())),
        }
    }

    /// The requested name, empty unless the request passed validation
    pub fn name(&self) -> &str {
        text_of(self.name.as_ref())
    }
}

impl ValidatedPayload for JoinRequest {
    const FIELDS: &'static [&'static str] = &["name"];
}

// ============================================================================
// Message Requests
// ============================================================================

/// Send message request
///
/// The sender is never read from the body; it comes from the caller's
/// identity.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(
        required(message = "\"to\" is required"),
        custom(function = "validate_to")
    )]
    pub to: Option<Value>,

    #[validate(
        required(message = "\"text\" is required"),
        custom(function = "validate_text")
    )]
    pub text: Option<Value>,

    #[serde(rename = "type")]
    #[validate(
        required(message = "\"type\" is required"),
        custom(function = "validate_submittable_type")
    )]
    pub message_type: Option<Value>,
}

impl SendMessageRequest {
    pub fn new(
        to: impl Into<String>,
        text: impl Into<String>,
        message_type: impl Into<String>,
    ) -> Self {
        Self {
            to: Some(Value::String(to.into())),
            text: Some(Value::String(text.into())),
            message_type: Some(Value::String(message_type.into())),
        }
    }

    pub fn to(&self) -> &str {
        text_of(self.to.as_ref())
    }

    pub fn text(&self) -> &str {
        text_of(self.text.as_ref())
    }

    /// The submitted kind, if it is one a participant may send
    pub fn message_type(&self) -> Option<MessageType> {
        submittable_type(self.message_type.as_ref()?)
    }
}

impl ValidatedPayload for SendMessageRequest {
    const FIELDS: &'static [&'static str] = &["to", "text", "message_type"];
}

fn text_of(value: Option<&Value>) -> &str {
    value.and_then(Value::as_str).unwrap_or_default()
}

fn submittable_type(value: &Value) -> Option<MessageType> {
    value
        .as_str()?
        .parse::<MessageType>()
        .ok()
        .filter(MessageType::is_user_submittable)
}

/// A present field must be a non-empty string
fn non_empty_string(field: &'static str, value: &Value) -> Result<(), ValidationError> {
    let message = match value.as_str() {
        Some(text) if !text.is_empty() => return Ok(()),
        Some(_) => format!("\"{field}\" is not allowed to be empty"),
        None => format!("\"{field}\" must be a string"),
    };
    Err(ValidationError::new(field).with_message(Cow::Owned(message)))
}

fn validate_name(value: &Value) -> Result<(), ValidationError> {
    non_empty_string("name", value)
}

fn validate_to(value: &Value) -> Result<(), ValidationError> {
    non_empty_string("to", value)
}

fn validate_text(value: &Value) -> Result<(), ValidationError> {
    non_empty_string("text", value)
}

/// Participants may only submit public or private messages
fn validate_submittable_type(value: &Value) -> Result<(), ValidationError> {
    match submittable_type(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("type").with_message(Cow::Borrowed(
            "\"type\" must be one of [message, private_message]",
        ))),
    }
}

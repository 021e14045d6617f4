//! Test fixtures and data generators
//!
//! Request bodies and response shapes as a client sees them.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Join request body
#[derive(Debug, Serialize)]
pub struct JoinBody {
    pub name: String,
}

impl JoinBody {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn unique() -> Self {
        Self::new(format!("participant{}", unique_suffix()))
    }
}

/// Message request body
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub message_type: String,
}

impl MessageBody {
    pub fn public(to: &str, text: &str) -> Self {
        Self {
            to: to.to_string(),
            text: text.to_string(),
            message_type: "message".to_string(),
        }
    }

    pub fn private(to: &str, text: &str) -> Self {
        Self {
            to: to.to_string(),
            text: text.to_string(),
            message_type: "private_message".to_string(),
        }
    }
}

/// Participant as returned by `GET /participants`
#[derive(Debug, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(rename = "lastHeartbeat")]
    pub last_heartbeat: i64,
}

/// Message as returned by `GET /messages`
#[derive(Debug, Deserialize)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub message_type: String,
    pub time: String,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<Vec<String>>,
}

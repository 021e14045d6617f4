//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Field names
//! follow the wire format clients already poll against.

use chrono::{DateTime, Utc};
use serde::Serialize;

use chat_core::entities::MessageType;

// ============================================================================
// Participant Responses
// ============================================================================

/// A present participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantResponse {
    pub name: String,
    /// Epoch milliseconds of the last join or heartbeat
    #[serde(rename = "lastHeartbeat")]
    pub last_heartbeat: i64,
}

// ============================================================================
// Message Responses
// ============================================================================

/// A message as seen by a viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub time: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

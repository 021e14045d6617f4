//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs carrying the payload validation rules
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;
pub mod validation;

pub use requests::{JoinRequest, SendMessageRequest};
pub use responses::{
    HealthChecks, HealthResponse, MessageResponse, ParticipantResponse, ReadinessResponse,
};
pub use validation::{parse_limit, ValidatedPayload};

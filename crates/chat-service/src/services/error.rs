//! Service layer error types
//!
//! One discriminant per outcome the transport must tell apart.

use chat_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Malformed input; every failure, in reporting order
    Validation(Vec<String>),

    /// Duplicate participant name
    Conflict(String),

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// Sender is not a present participant
    Unauthorized(String),

    /// Store failure or unexpected fault
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "Validation error: {}", errors.join("; ")),
            Self::Conflict(msg) => write!(f, "Conflict: {msg}"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Create a validation error with a single message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(vec![msg.into()])
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// Unauthorized shares 422 with validation failures.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 422,
            Self::Conflict(_) => 409,
            Self::NotFound { .. } => 404,
            Self::Unauthorized(_) => 422,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Unauthorized(_) => "UNKNOWN_SENDER",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Validation messages, empty for other kinds
    pub fn details(&self) -> &[String] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ParticipantNotFound(name) => Self::not_found("Participant", name),
            DomainError::ParticipantNameTaken(name) => {
                Self::conflict(format!("participant name already in use: {name}"))
            }
            err @ DomainError::DatabaseError(_) => Self::internal(err.to_string()),
        }
    }
}

impl From<Vec<String>> for ServiceError {
    fn from(errors: Vec<String>) -> Self {
        Self::Validation(errors)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

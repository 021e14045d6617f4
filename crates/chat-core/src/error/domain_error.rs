//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Participant name already in use: {0}")]
    ParticipantNameTaken(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

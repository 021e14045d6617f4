//! Repository traits (ports) - define the interface for data access
//!
//! The store is collection-oriented: one repository per collection
//! (participants, messages). Implementations must not cache; every call
//! observes the latest committed state, since request flows and the
//! presence reaper share the store concurrently.

use async_trait::async_trait;

use crate::entities::{Message, Participant};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Participant Repository
// ============================================================================

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Find participant by exact name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Participant>>;

    /// Insert a participant
    ///
    /// Fails with `DomainError::ParticipantNameTaken` when the name exists.
    async fn create(&self, participant: &Participant) -> RepoResult<()>;

    /// List all present participants
    async fn list(&self) -> RepoResult<Vec<Participant>>;

    /// Set the heartbeat of `name` to `at_ms`; returns false when no row matched
    async fn touch(&self, name: &str, at_ms: i64) -> RepoResult<bool>;

    /// Find participants whose heartbeat is older than `cutoff_ms`
    async fn find_stale(&self, cutoff_ms: i64) -> RepoResult<Vec<Participant>>;

    /// Delete the named participants that are still older than `cutoff_ms`
    ///
    /// Staleness is evaluated again at delete time, so a participant that
    /// heartbeated after being selected is kept. Returns the number removed.
    async fn delete_stale(&self, names: &[String], cutoff_ms: i64) -> RepoResult<u64>;

    /// Delete a participant by name; returns false when no row matched
    async fn delete(&self, name: &str) -> RepoResult<bool>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append a message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Append several messages; either all are stored or none
    async fn create_many(&self, messages: &[Message]) -> RepoResult<()>;

    /// Messages visible to `viewer`, oldest first
    ///
    /// With `Some(limit)`, only the newest `limit` visible messages are
    /// returned, still oldest first.
    async fn find_visible(&self, viewer: &str, limit: Option<usize>) -> RepoResult<Vec<Message>>;
}

//! Service context - dependency container for services
//!
//! Holds the store ports, the clock, and the presence timing policy.

use std::sync::Arc;
use std::time::Duration;

use chat_common::PresenceConfig;
use chat_core::traits::{Clock, MessageRepository, ParticipantRepository, SystemClock};

use super::error::{ServiceError, ServiceResult};

/// Presence lifecycle timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresencePolicy {
    /// Silence after which a participant is stale
    pub stale_after: Duration,
    /// Reaper wake interval
    pub reap_interval: Duration,
}

impl Default for PresencePolicy {
    fn default() -> Self {
        Self {
            stale_after: Duration::from_secs(10),
            reap_interval: Duration::from_secs(15),
        }
    }
}

impl From<&PresenceConfig> for PresencePolicy {
    fn from(config: &PresenceConfig) -> Self {
        Self {
            stale_after: config.stale_after(),
            reap_interval: config.reap_interval(),
        }
    }
}

/// Service context containing all dependencies
///
/// Constructed once at startup, after the store is connected, and shared
/// by request handlers and the presence reaper.
#[derive(Clone)]
pub struct ServiceContext {
    participant_repo: Arc<dyn ParticipantRepository>,
    message_repo: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
    presence: PresencePolicy,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        participant_repo: Arc<dyn ParticipantRepository>,
        message_repo: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
        presence: PresencePolicy,
    ) -> Self {
        Self {
            participant_repo,
            message_repo,
            clock,
            presence,
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the participant repository
    pub fn participant_repo(&self) -> &dyn ParticipantRepository {
        self.participant_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    // === Time ===

    /// Get the clock
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Get the presence timing policy
    pub fn presence(&self) -> PresencePolicy {
        self.presence
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("presence", &self.presence)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    participant_repo: Option<Arc<dyn ParticipantRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    clock: Option<Arc<dyn Clock>>,
    presence: PresencePolicy,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            participant_repo: None,
            message_repo: None,
            clock: None,
            presence: PresencePolicy::default(),
        }
    }

    pub fn participant_repo(mut self, repo: Arc<dyn ParticipantRepository>) -> Self {
        self.participant_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    /// Use one store for both collections
    pub fn store<S>(self, store: Arc<S>) -> Self
    where
        S: ParticipantRepository + MessageRepository + 'static,
    {
        self.participant_repo(store.clone()).message_repo(store)
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn presence(mut self, presence: PresencePolicy) -> Self {
        self.presence = presence;
        self
    }

    /// Build the ServiceContext
    ///
    /// The clock defaults to [`SystemClock`].
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if a repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.participant_repo
                .ok_or_else(|| ServiceError::internal("participant_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::internal("message_repo is required"))?,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.presence,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

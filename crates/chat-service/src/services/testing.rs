//! Test fixtures shared by the service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;

use chat_core::entities::{Message, Participant};
use chat_core::error::DomainError;
use chat_core::traits::{Clock, ManualClock, MessageRepository, ParticipantRepository, RepoResult};
use chat_db::MemoryStore;

use super::context::{PresencePolicy, ServiceContext};

/// 2024-05-01T12:00:00Z
pub const START_MS: i64 = 1_714_564_800_000;

pub struct Harness {
    pub ctx: ServiceContext,
    pub store: Arc<MemoryStore>,
    pub clock: Arc<ManualClock>,
}

/// Services over an empty memory store and a clock frozen at [`START_MS`]
pub fn harness() -> Harness {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(ManualClock::from_millis(START_MS));
    let ctx = ServiceContext::builder()
        .store(store.clone())
        .clock(clock.clone())
        .presence(PresencePolicy::default())
        .build()
        .unwrap();

    Harness { ctx, store, clock }
}

impl Harness {
    /// Same participants and clock, different message collection
    pub fn with_messages(&self, messages: impl MessageRepository + 'static) -> ServiceContext {
        ServiceContext::new(
            self.store.clone(),
            Arc::new(messages),
            self.clock.clone(),
            self.ctx.presence(),
        )
    }

    /// Insert a participant directly, heartbeat at the current clock
    pub async fn seat(&self, name: &str) {
        ParticipantRepository::create(self.store.as_ref(), &Participant::new(name, self.clock.now()))
            .await
            .unwrap();
    }

    /// Insert a participant directly with an explicit heartbeat
    pub async fn seat_at(&self, name: &str, at_ms: i64) {
        let at = DateTime::from_timestamp_millis(at_ms).unwrap();
        ParticipantRepository::create(self.store.as_ref(), &Participant::new(name, at))
            .await
            .unwrap();
    }

    pub async fn names(&self) -> Vec<String> {
        self.store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect()
    }
}

/// Message collection whose writes always fail
pub struct FailingMessages;

impl FailingMessages {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MessageRepository for FailingMessages {
    async fn create(&self, _message: &Message) -> RepoResult<()> {
        Err(DomainError::DatabaseError("message insert failed".to_string()))
    }

    async fn create_many(&self, _messages: &[Message]) -> RepoResult<()> {
        Err(DomainError::DatabaseError("message insert failed".to_string()))
    }

    async fn find_visible(&self, _viewer: &str, _limit: Option<usize>) -> RepoResult<Vec<Message>> {
        Ok(Vec::new())
    }
}

/// Message collection whose first `failures` batch writes fail
///
/// Every other call goes to the wrapped memory store.
pub struct FlakyMessages {
    inner: Arc<MemoryStore>,
    failures: AtomicUsize,
}

impl FlakyMessages {
    pub fn new(inner: Arc<MemoryStore>, failures: usize) -> Self {
        Self {
            inner,
            failures: AtomicUsize::new(failures),
        }
    }
}

#[async_trait]
impl MessageRepository for FlakyMessages {
    async fn create(&self, message: &Message) -> RepoResult<()> {
        MessageRepository::create(self.inner.as_ref(), message).await
    }

    async fn create_many(&self, messages: &[Message]) -> RepoResult<()> {
        let fail = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if fail {
            return Err(DomainError::DatabaseError("message insert failed".to_string()));
        }
        self.inner.create_many(messages).await
    }

    async fn find_visible(&self, viewer: &str, limit: Option<usize>) -> RepoResult<Vec<Message>> {
        self.inner.find_visible(viewer, limit).await
    }
}

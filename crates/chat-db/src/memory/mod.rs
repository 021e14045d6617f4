//! In-process store
//!
//! Implements both repository ports over lock-guarded collections. Each
//! operation holds its lock for the whole check-and-write, so a name
//! collision on `create` is detected atomically and a batch append is
//! all-or-nothing, the same guarantees the PostgreSQL adapter gets from
//! its primary key and multi-row insert.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::instrument;

use chat_core::entities::{Message, Participant};
use chat_core::error::DomainError;
use chat_core::traits::{MessageRepository, ParticipantRepository, RepoResult};
use chat_core::visibility::select_visible;

/// In-memory participants and messages
#[derive(Debug, Default)]
pub struct MemoryStore {
    participants: RwLock<BTreeMap<String, Participant>>,
    messages: RwLock<Vec<Message>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored messages
    pub fn message_count(&self) -> usize {
        self.messages.read().len()
    }

    /// Number of present participants
    pub fn participant_count(&self) -> usize {
        self.participants.read().len()
    }
}

#[async_trait]
impl ParticipantRepository for MemoryStore {
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Participant>> {
        Ok(self.participants.read().get(name).cloned())
    }

    #[instrument(skip(self, participant), fields(name = %participant.name))]
    async fn create(&self, participant: &Participant) -> RepoResult<()> {
        let mut participants = self.participants.write();
        if participants.contains_key(&participant.name) {
            return Err(DomainError::ParticipantNameTaken(participant.name.clone()));
        }
        participants.insert(participant.name.clone(), participant.clone());
        Ok(())
    }

    async fn list(&self) -> RepoResult<Vec<Participant>> {
        Ok(self.participants.read().values().cloned().collect())
    }

    async fn touch(&self, name: &str, at_ms: i64) -> RepoResult<bool> {
        match self.participants.write().get_mut(name) {
            Some(participant) => {
                participant.last_heartbeat = at_ms;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_stale(&self, cutoff_ms: i64) -> RepoResult<Vec<Participant>> {
        Ok(self
            .participants
            .read()
            .values()
            .filter(|p| p.is_stale(cutoff_ms))
            .cloned()
            .collect())
    }

    #[instrument(skip(self, names), fields(count = names.len()))]
    async fn delete_stale(&self, names: &[String], cutoff_ms: i64) -> RepoResult<u64> {
        let mut participants = self.participants.write();
        let mut removed = 0;
        for name in names {
            let still_stale = participants
                .get(name)
                .is_some_and(|p| p.is_stale(cutoff_ms));
            if still_stale {
                participants.remove(name);
                removed += 1;
            }
        }
        Ok(removed)
    }

    async fn delete(&self, name: &str) -> RepoResult<bool> {
        Ok(self.participants.write().remove(name).is_some())
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn create(&self, message: &Message) -> RepoResult<()> {
        self.messages.write().push(message.clone());
        Ok(())
    }

    async fn create_many(&self, messages: &[Message]) -> RepoResult<()> {
        self.messages.write().extend_from_slice(messages);
        Ok(())
    }

    async fn find_visible(&self, viewer: &str, limit: Option<usize>) -> RepoResult<Vec<Message>> {
        Ok(select_visible(self.messages.read().iter(), viewer, limit))
    }
}

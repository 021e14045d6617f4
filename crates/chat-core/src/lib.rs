//! # chat-core
//!
//! Domain layer containing entities, the message visibility rule, domain errors,
//! and the ports (repository and clock traits) the store adapters implement.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod visibility;

// Re-export commonly used types at crate root
pub use entities::{
    format_message_time, staleness_cutoff, Message, MessageType, Participant,
    ParseMessageTypeError, BROADCAST_RECIPIENT, JOIN_TEXT, LEAVE_TEXT,
};
pub use error::DomainError;
pub use traits::{
    Clock, ManualClock, MessageRepository, ParticipantRepository, RepoResult, SystemClock,
};
pub use visibility::{is_visible_to, select_visible};

//! Business logic services
//!
//! Presence and message services over the store ports, the presence
//! reaper, and the orchestrator the transport calls into.

pub mod chat;
pub mod context;
pub mod error;
pub mod message;
pub mod presence;
pub mod reaper;

#[cfg(test)]
mod testing;

pub use chat::ChatService;
pub use context::{PresencePolicy, ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use presence::PresenceService;
pub use reaper::{PresenceReaper, ReapReport};

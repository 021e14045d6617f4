//! Database models - SQLx-compatible structs for PostgreSQL tables

mod message;
mod participant;

pub use message::MessageModel;
pub use participant::ParticipantModel;

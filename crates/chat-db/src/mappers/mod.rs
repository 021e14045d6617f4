//! Entity <-> Model mappers

mod message;
mod participant;

pub use message::MessageInsert;

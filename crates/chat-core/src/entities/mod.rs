//! Domain entities - core business objects

mod message;
mod participant;

pub use message::{
    format_message_time, Message, MessageType, ParseMessageTypeError, BROADCAST_RECIPIENT,
    JOIN_TEXT, LEAVE_TEXT,
};
pub use participant::{staleness_cutoff, Participant};

//! Per-viewer message visibility
//!
//! Visibility is a predicate evaluated against every stored message, not a
//! room lookup. A message is visible to `viewer` when it is public, when it
//! is addressed to everyone, or when the viewer sent or receives it.

use crate::entities::{Message, MessageType};

/// Check whether `viewer` may see `message`
pub fn is_visible_to(message: &Message, viewer: &str) -> bool {
    message.message_type == MessageType::Message
        || message.is_broadcast()
        || message.to == viewer
        || message.from == viewer
}

/// Select the messages `viewer` may see, oldest first
///
/// `messages` must be in insertion order. With a limit, only the newest
/// `limit` visible messages are kept (the tail, not the head), still in
/// chronological order.
pub fn select_visible<'a, I>(messages: I, viewer: &str, limit: Option<usize>) -> Vec<Message>
where
    I: IntoIterator<Item = &'a Message>,
    I::IntoIter: DoubleEndedIterator,
{
    let visible = messages
        .into_iter()
        .filter(|message| is_visible_to(message, viewer));

    match limit {
        None => visible.cloned().collect(),
        Some(limit) => {
            let mut tail: Vec<Message> = visible.rev().take(limit).cloned().collect();
            tail.reverse();
            tail
        }
    }
}

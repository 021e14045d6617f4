//! Route handlers
//!
//! One module per resource. Handlers only extract, delegate, and map.

pub mod health;
pub mod messages;
pub mod participants;
pub mod status;

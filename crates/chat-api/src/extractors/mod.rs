//! Axum extractors for request handling
//!
//! Custom extractors for caller identity, JSON bodies, and the message
//! listing query.

mod identity;
mod json;
mod limit;

pub use identity::{ParticipantIdentity, IDENTITY_HEADER};
pub use json::ChatJson;
pub use limit::{LimitParam, LimitParams};

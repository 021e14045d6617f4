//! # chat-service
//!
//! Application layer: payload validation, the presence lifecycle, per-viewer
//! message retrieval, and the presence reaper.

pub mod dto;
pub mod services;

pub use services::{
    ChatService, MessageService, PresencePolicy, PresenceReaper, PresenceService, ReapReport,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};

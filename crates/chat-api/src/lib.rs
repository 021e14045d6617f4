//! # chat-api
//!
//! HTTP transport built with the Axum framework. Handlers extract inputs,
//! call the chat orchestrator, and map its result to a status code.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server, shutdown_signal};
pub use state::AppState;

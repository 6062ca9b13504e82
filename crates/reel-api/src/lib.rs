//! Reel API Library
//!
//! This crate provides the HTTP API handlers, authentication, and application setup.

pub mod api_doc;
pub mod constants;
mod handlers;
pub mod middleware;
pub mod setup;
pub mod telemetry;

pub mod auth;
pub mod error;
pub mod state;

pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;

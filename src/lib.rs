//! # `taskboard`
//!
//! Single-process task tracker: an in-memory task list behind a JSON HTTP
//! API, plus a static web UI. No persistence — state resets on restart.

pub mod error;
pub mod http;
pub mod tasks;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! FairFence HTTP server library.
//!
//! Exposes the router, state, and config so integration tests can drive the
//! service through `tower::ServiceExt::oneshot` without binding a socket.

pub mod api;
pub mod config;
mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};

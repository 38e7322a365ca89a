//! HTTP layer of the ironlog backend.
//!
//! Exposes the router, state, and config so integration tests can build
//! the full application without going through `main`.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is already `Clone`, the config is
/// behind an `Arc`). The pool is constructed once in `main` and passed
/// down explicitly; nothing in the crate reaches for an ambient global.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ironlog_db::DbPool,
    /// Server configuration (accessed by the auth extractor and middleware).
    pub config: Arc<ServerConfig>,
}

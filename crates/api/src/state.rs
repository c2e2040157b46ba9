use std::sync::Arc;

use crate::config::ServerConfig;
use crate::session::SessionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: campusbuddy_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// In-memory session store (token -> identity + flash).
    pub sessions: Arc<SessionStore>,
}

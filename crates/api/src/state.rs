use std::sync::Arc;

use sgbirds_ebird::EbirdClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). The eBird client is constructed once at startup and injected
/// here rather than living as a module-level singleton.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sgbirds_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// eBird API client.
    pub ebird: Arc<EbirdClient>,
}

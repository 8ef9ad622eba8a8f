use std::sync::Arc;

use crate::auth::credentials::CredentialService;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: recipebox_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Credential service bound to this server's JWT settings.
    pub fn credentials(&self) -> CredentialService<'_> {
        CredentialService::new(&self.config.jwt)
    }
}

use std::sync::Arc;

use crate::catalog::CatalogService;
use crate::config::ServerConfig;

/// State shared by every handler through `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub pool: catalog_db::DbPool,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Catalog operations bound to this state's pool.
    pub fn catalog(&self) -> CatalogService<'_> {
        CatalogService::new(&self.pool)
    }
}

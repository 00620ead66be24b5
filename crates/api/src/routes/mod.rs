pub mod health;
pub mod product_service;

use axum::Router;

use crate::state::AppState;

/// Build the service route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                 service and database health
/// /ProductService.svc     GET describe, POST call
/// ```
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(product_service::router())
}

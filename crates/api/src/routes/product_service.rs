//! Route definitions for the product service.

use axum::routing::get;
use axum::Router;
use catalog_core::rpc::SERVICE_PATH;

use crate::handlers::product_service;
use crate::state::AppState;

/// Routes mounted at `/ProductService.svc`.
///
/// ```text
/// GET  -> describe
/// POST -> call
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        SERVICE_PATH,
        get(product_service::describe).post(product_service::call),
    )
}

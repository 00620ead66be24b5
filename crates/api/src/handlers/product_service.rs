//! Handlers for the product service RPC endpoint.
//!
//! A single `POST` endpoint receives a [`ProductCall`], dispatches it to the
//! matching [`crate::catalog::CatalogService`] method and wraps the result in the standard
//! `{ "data": ... }` envelope. `GET` on the same path publishes the contract.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::product::ProductDto;
use catalog_core::rpc::{OperationDescriptor, ProductCall, OPERATIONS, SERVICE_NAME, SERVICE_PATH};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result payload of a product service call.
///
/// Void operations serialize as `null`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProductReply {
    Products(Vec<ProductDto>),
    Product(ProductDto),
    Empty,
}

/// Published description of the product service contract.
#[derive(Debug, Serialize)]
pub struct ServiceDescription {
    pub service: &'static str,
    pub endpoint: &'static str,
    pub operations: &'static [OperationDescriptor],
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /ProductService.svc
///
/// Invoke one product service operation.
pub async fn call(
    State(state): State<AppState>,
    payload: Result<Json<ProductCall>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(call) = payload?;
    let operation = call.name();
    tracing::debug!(operation, "Dispatching product service call");

    let service = state.catalog();
    let reply = match call {
        ProductCall::GetAllProducts => ProductReply::Products(service.list_all().await?),
        ProductCall::GetProductById { id } => ProductReply::Product(service.get_by_id(id).await?),
        ProductCall::GetProductsByFilter { filter } => {
            ProductReply::Products(service.filter(&filter).await?)
        }
        ProductCall::AddProduct { product } => {
            service.add(&product).await?;
            ProductReply::Empty
        }
        ProductCall::UpdateProduct { product } => {
            service.update(&product).await?;
            ProductReply::Empty
        }
        ProductCall::DeleteProduct { id } => {
            service.delete(id).await?;
            ProductReply::Empty
        }
    };

    Ok(Json(DataResponse { data: reply }))
}

/// GET /ProductService.svc
///
/// Describe the operations the service accepts.
pub async fn describe() -> Json<DataResponse<ServiceDescription>> {
    Json(DataResponse {
        data: ServiceDescription {
            service: SERVICE_NAME,
            endpoint: SERVICE_PATH,
            operations: OPERATIONS,
        },
    })
}

//! Product service contract.
//!
//! Each remotely callable operation is one variant of [`ProductCall`]. The
//! wire shape is a JSON object tagged by `operation`, carrying the
//! operation's parameters as sibling keys:
//!
//! ```json
//! { "operation": "GetProductById", "id": 3 }
//! ```
//!
//! The server deserializes a call and the export worker serializes one, so
//! both sides share this single definition.

use serde::{Deserialize, Serialize};

use crate::filter::ProductQueryFilter;
use crate::product::ProductDto;
use crate::types::DbId;

/// Path the product service is mounted at.
pub const SERVICE_PATH: &str = "/ProductService.svc";

/// Contract name reported by the service description.
pub const SERVICE_NAME: &str = "ProductService";

/// One invocation of a product service operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation")]
pub enum ProductCall {
    GetAllProducts,
    GetProductById {
        id: DbId,
    },
    GetProductsByFilter {
        #[serde(default)]
        filter: ProductQueryFilter,
    },
    AddProduct {
        product: ProductDto,
    },
    UpdateProduct {
        product: ProductDto,
    },
    DeleteProduct {
        id: DbId,
    },
}

impl ProductCall {
    /// Operation name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetAllProducts => "GetAllProducts",
            Self::GetProductById { .. } => "GetProductById",
            Self::GetProductsByFilter { .. } => "GetProductsByFilter",
            Self::AddProduct { .. } => "AddProduct",
            Self::UpdateProduct { .. } => "UpdateProduct",
            Self::DeleteProduct { .. } => "DeleteProduct",
        }
    }
}

// ---------------------------------------------------------------------------
// Contract description
// ---------------------------------------------------------------------------

/// Description of one operation, published by the service metadata endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub params: &'static [&'static str],
    pub returns: &'static str,
}

/// Every operation of the product service, in contract order.
pub const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor {
        name: "GetAllProducts",
        params: &[],
        returns: "ProductDto[]",
    },
    OperationDescriptor {
        name: "GetProductById",
        params: &["id"],
        returns: "ProductDto",
    },
    OperationDescriptor {
        name: "GetProductsByFilter",
        params: &["filter"],
        returns: "ProductDto[]",
    },
    OperationDescriptor {
        name: "AddProduct",
        params: &["product"],
        returns: "void",
    },
    OperationDescriptor {
        name: "UpdateProduct",
        params: &["product"],
        returns: "void",
    },
    OperationDescriptor {
        name: "DeleteProduct",
        params: &["id"],
        returns: "void",
    },
];

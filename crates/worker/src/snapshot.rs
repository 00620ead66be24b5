//! Conversion of a `GetAllProducts` reply into the exported document.
//!
//! A well-formed reply becomes a [`ProductSnapshot`]. Anything else becomes a
//! [`ConversionErrorRecord`] carrying the raw body, so a bad tick still
//! leaves evidence on disk instead of aborting.

use catalog_core::product::ProductDto;
use catalog_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Errors converting a service reply.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Malformed service reply: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Shape of a successful `GetAllProducts` reply.
#[derive(Debug, Deserialize)]
struct ServiceReply {
    data: Vec<ProductDto>,
}

/// Catalog snapshot written on a successful tick.
#[derive(Debug, Serialize)]
pub struct ProductSnapshot {
    pub generated_at: Timestamp,
    pub count: usize,
    pub products: Vec<ProductDto>,
}

/// Written in place of the snapshot when the reply cannot be converted.
#[derive(Debug, Serialize)]
pub struct ConversionErrorRecord {
    pub error: String,
    pub raw_input: String,
    pub timestamp: Timestamp,
}

/// The document a tick writes to disk.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ExportDocument {
    Snapshot(ProductSnapshot),
    ConversionError(ConversionErrorRecord),
}

/// Parse a raw reply body into a snapshot.
pub fn convert(raw: &str, now: Timestamp) -> Result<ProductSnapshot, SnapshotError> {
    let reply: ServiceReply = serde_json::from_str(raw)?;
    Ok(ProductSnapshot {
        generated_at: now,
        count: reply.data.len(),
        products: reply.data,
    })
}

impl ExportDocument {
    /// Build the document for a raw reply, falling back to an error record.
    pub fn from_reply(raw: &str, now: Timestamp) -> Self {
        match convert(raw, now) {
            Ok(snapshot) => Self::Snapshot(snapshot),
            Err(e) => {
                tracing::error!(error = %e, "Export: reply conversion failed, writing error record");
                Self::ConversionError(ConversionErrorRecord {
                    error: e.to_string(),
                    raw_input: raw.to_string(),
                    timestamp: now,
                })
            }
        }
    }

    /// Number of products in the document (zero for an error record).
    pub fn product_count(&self) -> usize {
        match self {
            Self::Snapshot(s) => s.count,
            Self::ConversionError(_) => 0,
        }
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self, Self::Snapshot(_))
    }

    /// Render as indented JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

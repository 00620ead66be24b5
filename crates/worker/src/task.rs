//! The catalog export tick.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::client::{CatalogClient, ClientError};
use crate::config::ExportConfig;
use crate::output;
use crate::snapshot::ExportDocument;

/// Faults that end a tick early.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The service could not be reached or answered with a non-2xx status.
    #[error(transparent)]
    Transport(#[from] ClientError),

    /// The document could not be rendered.
    #[error("Failed to render export: {0}")]
    Render(#[from] serde_json::Error),

    /// The output directory could not be updated.
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a completed tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// File that was written.
    pub path: PathBuf,
    /// Products in the snapshot (zero when an error record was written).
    pub product_count: usize,
    /// Whether the reply converted into a snapshot.
    pub converted: bool,
}

/// Snapshot export of the full catalog through the product service.
pub struct ExportTask {
    client: CatalogClient,
    output_dir: PathBuf,
}

impl ExportTask {
    pub fn new(client: CatalogClient, output_dir: PathBuf) -> Self {
        Self { client, output_dir }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(
            CatalogClient::new(config.service_url.clone()),
            config.output_dir.clone(),
        )
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Run one tick. Every fault is logged and swallowed.
    pub async fn run_once(&self) {
        match self.try_run().await {
            Ok(outcome) => {
                tracing::info!(
                    path = %outcome.path.display(),
                    product_count = outcome.product_count,
                    converted = outcome.converted,
                    "Export: file written"
                );
            }
            Err(ExportError::Transport(e)) => {
                tracing::error!(error = %e, "Export: service call failed, skipping tick");
            }
            Err(e) => {
                tracing::error!(error = %e, "Export: tick failed");
            }
        }
    }

    /// Run one tick and report what happened.
    ///
    /// A transport failure returns before the output directory is touched.
    /// A conversion failure is not an error: the error record is written
    /// instead of the snapshot.
    pub async fn try_run(&self) -> Result<ExportOutcome, ExportError> {
        tracing::info!(service_url = self.client.service_url(), "Export: fetching catalog");

        let raw = self.client.get_all_products().await?;

        let now = Utc::now();
        let document = ExportDocument::from_reply(&raw, now);
        let contents = document.to_json()?;

        let path = output::replace_export(&self.output_dir, now, &contents).await?;

        Ok(ExportOutcome {
            path,
            product_count: document.product_count(),
            converted: document.is_snapshot(),
        })
    }
}

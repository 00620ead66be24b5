use std::path::PathBuf;

/// Default cadence: every two minutes.
pub const DEFAULT_SCHEDULE: &str = "*/2 * * * *";

/// Export task configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Full URL of the product service endpoint.
    pub service_url: String,
    /// Directory the snapshot file is written to.
    pub output_dir: PathBuf,
    /// Cron expression for the tick cadence.
    pub schedule: String,
}

impl ExportConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                                       |
    /// |----------------------|-----------------------------------------------|
    /// | `EXPORT_SERVICE_URL` | `http://localhost:3000/ProductService.svc`    |
    /// | `EXPORT_OUTPUT_DIR`  | `./exports`                                   |
    /// | `EXPORT_SCHEDULE`    | `*/2 * * * *`                                 |
    pub fn from_env() -> Self {
        let service_url = std::env::var("EXPORT_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:3000/ProductService.svc".into());

        let output_dir = std::env::var("EXPORT_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./exports"));

        let schedule =
            std::env::var("EXPORT_SCHEDULE").unwrap_or_else(|_| DEFAULT_SCHEDULE.into());

        Self {
            service_url,
            output_dir,
            schedule,
        }
    }
}

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_worker::config::ExportConfig;
use catalog_worker::schedule;
use catalog_worker::task::ExportTask;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ExportConfig::from_env();
    tracing::info!(
        service_url = %config.service_url,
        output_dir = %config.output_dir.display(),
        schedule = %config.schedule,
        "Loaded export configuration"
    );

    let cadence = schedule::parse_schedule(&config.schedule)
        .expect("EXPORT_SCHEDULE must be a valid cron expression");
    let task = ExportTask::from_config(&config);

    let cancel = CancellationToken::new();
    let scheduler = tokio::spawn(schedule::run(cadence, task, cancel.clone()));

    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl-C handler");
    tracing::info!("Received SIGINT (Ctrl-C), stopping export scheduler");

    cancel.cancel();
    if schedule::join(scheduler).await.is_ok() {
        tracing::info!("Worker stopped");
    }
}

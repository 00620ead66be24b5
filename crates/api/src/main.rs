use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_api::config::ServerConfig;
use catalog_api::router::build_app_router;
use catalog_api::state::AppState;
use catalog_worker::config::ExportConfig;
use catalog_worker::schedule;
use catalog_worker::task::ExportTask;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "catalog_api=debug,catalog_worker=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        export_enabled = config.export_enabled,
        "Loaded server configuration"
    );

    // --- Catalog store ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = catalog_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    catalog_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    catalog_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Catalog store ready");

    // --- Export scheduler ---
    let export_cancel = CancellationToken::new();
    let export_handle = config
        .export_enabled
        .then(|| spawn_export_scheduler(export_cancel.clone()));

    // --- Server ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Product service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // A running tick finishes; only the wait for the next one is cut short.
    export_cancel.cancel();
    if let Some(handle) = export_handle {
        let grace = Duration::from_secs(config.shutdown_timeout_secs);
        if tokio::time::timeout(grace, schedule::join(handle)).await.is_err() {
            tracing::warn!("Export tick still running at shutdown, abandoning it");
        }
    }

    tracing::info!("Shutdown complete");
}

/// Start the cron-driven export against this process's own service endpoint
/// (or whatever `EXPORT_SERVICE_URL` points at).
fn spawn_export_scheduler(cancel: CancellationToken) -> JoinHandle<()> {
    let export_config = ExportConfig::from_env();
    let cadence = schedule::parse_schedule(&export_config.schedule)
        .expect("EXPORT_SCHEDULE must be a valid cron expression");
    tracing::info!(
        schedule = %export_config.schedule,
        service_url = %export_config.service_url,
        output_dir = %export_config.output_dir.display(),
        "Catalog export enabled"
    );

    let task = ExportTask::from_config(&export_config);
    tokio::spawn(schedule::run(cadence, task, cancel))
}

/// Resolve on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let interrupt = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal, "Stopping product service");
}

use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use job_board::app_state::AppState;
use job_board::config::AppConfig;
use job_board::routes;
use job_board::services::board::JobBoard;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!(
        backend = ?config.storage_backend,
        data_dir = %config.data_dir.display(),
        key = %config.storage_key,
        "Initializing job-board server"
    );

    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");

    metrics::describe_counter!("jobs_created_total", "Jobs added through the form");
    metrics::describe_counter!("jobs_updated_total", "Jobs edited through the form");
    metrics::describe_counter!("jobs_deleted_total", "Jobs deleted after confirmation");
    metrics::describe_counter!(
        "job_validation_failures_total",
        "Submissions rejected for a missing title or company"
    );
    metrics::describe_gauge!("jobs_stored", "Jobs currently in the snapshot");

    // Load the snapshot once; the board owns it for the rest of the process
    let board = JobBoard::open(config.snapshot_store());
    let state = AppState::new(board);

    let app = routes::router(state, Some(Arc::new(prometheus_handle)));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}

pub mod api;
pub mod board;
pub mod health;
pub mod metrics;

use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Build the application router. `/metrics` is mounted only when a
/// Prometheus recorder was installed.
pub fn router(state: AppState, prometheus: Option<Arc<PrometheusHandle>>) -> Router {
    let app = Router::new()
        .route("/", get(board::show_board))
        .route("/jobs", post(board::submit_job))
        .route("/jobs/{id}/edit", get(board::edit_job))
        .route(
            "/jobs/{id}/delete",
            get(board::confirm_delete).post(board::delete_job),
        )
        .route("/jobs/{id}/apply", post(board::apply_job))
        .route("/form/reset", get(board::confirm_reset).post(board::reset_form))
        .route("/api/jobs", get(api::list_jobs))
        .route("/health", get(health::health_check))
        .with_state(state);

    let app = match prometheus {
        Some(handle) => app.route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(handle),
        ),
        None => app,
    };

    app.layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(64 * 1024))
}

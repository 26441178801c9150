use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;
use crate::models::filter::{FilterParams, JobFilter};
use crate::models::job::JobRecord;
use crate::services::filter::{count_label, filter_jobs};

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub count: usize,
    pub status: String,
    pub jobs: Vec<JobRecord>,
}

/// GET /api/jobs — the filtered list as JSON, same rules as the board.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Json<JobListResponse> {
    let filter = JobFilter::from(&params);
    let session = state.session.lock().await;
    let jobs: Vec<JobRecord> = filter_jobs(session.board.jobs(), &filter)
        .into_iter()
        .cloned()
        .collect();

    Json(JobListResponse {
        count: jobs.len(),
        status: count_label(jobs.len()),
        jobs,
    })
}

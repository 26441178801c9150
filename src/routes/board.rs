use askama::Template;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use crate::app_state::AppState;
use crate::models::filter::FilterParams;
use crate::models::job::JobDraft;
use crate::services::board::{BoardError, DELETE_PROMPT};
use crate::services::confirm::Confirmation;
use crate::services::form::{SubmitOutcome, RESET_PROMPT};
use crate::views::{BoardPage, ConfirmPage};

pub const APPLY_NOTICE: &str =
    "Apply clicked — this is demo UI. Implement backend to receive applications.";

/// Body of the confirmation forms.
#[derive(Debug, Deserialize)]
pub struct ConfirmInput {
    pub confirm: Option<String>,
}

/// GET / — the board: form, filters, and the visible jobs.
///
/// Submitted `q`/`cat` become the session's active filter; the redirects
/// after each action carry none and render under the filter already active.
pub async fn show_board(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Html<String>, StatusCode> {
    let mut session = state.session.lock().await;
    session.apply_filter(params);
    let page = BoardPage::build(&mut session);
    render(&page)
}

/// POST /jobs — Add or Update, depending on the form's editing target.
pub async fn submit_job(
    State(state): State<AppState>,
    Form(input): Form<JobDraft>,
) -> Redirect {
    let mut session = state.session.lock().await;
    let session = &mut *session;
    session.form.set_fields(input);

    match session.form.submit(&mut session.board) {
        Ok(SubmitOutcome::Created(id)) => tracing::debug!(job_id = %id, "Form created job"),
        Ok(SubmitOutcome::Updated(id)) => tracing::debug!(job_id = %id, "Form updated job"),
        Ok(SubmitOutcome::Missing(id)) => {
            tracing::debug!(job_id = %id, "Form target vanished before update")
        }
        Err(e @ BoardError::Validation) => session.notify(e.to_string()),
        Err(e) => {
            tracing::error!(error = %e, "Failed to persist job");
            session.notify(e.to_string());
        }
    }
    Redirect::to("/")
}

/// GET /jobs/{id}/edit — load a job into the form.
pub async fn edit_job(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    let mut session = state.session.lock().await;
    let session = &mut *session;
    session.form.start_edit(&session.board, &id);
    Redirect::to("/#job-form")
}

/// GET /jobs/{id}/delete — ask before deleting.
pub async fn confirm_delete(Path(id): Path<String>) -> Result<Html<String>, StatusCode> {
    render(&ConfirmPage {
        prompt: DELETE_PROMPT,
        action: format!("/jobs/{id}/delete"),
    })
}

/// POST /jobs/{id}/delete — delete once the user has confirmed.
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<ConfirmInput>,
) -> Redirect {
    let mut confirmation = Confirmation::from_field(input.confirm.as_deref());
    let mut session = state.session.lock().await;

    if let Err(e) = session.board.delete(&id, &mut confirmation) {
        tracing::error!(job_id = %id, error = %e, "Failed to persist job deletion");
        session.notify(e.to_string());
    }
    Redirect::to("/")
}

/// POST /jobs/{id}/apply — informational only, no state change.
pub async fn apply_job(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    tracing::debug!(job_id = %id, "Apply clicked");
    state.session.lock().await.notify(APPLY_NOTICE);
    Redirect::to("/")
}

/// GET /form/reset — ask before clearing the form.
pub async fn confirm_reset() -> Result<Html<String>, StatusCode> {
    render(&ConfirmPage {
        prompt: RESET_PROMPT,
        action: "/form/reset".to_string(),
    })
}

/// POST /form/reset — clear the form once the user has confirmed.
pub async fn reset_form(State(state): State<AppState>, Form(input): Form<ConfirmInput>) -> Redirect {
    let mut confirmation = Confirmation::from_field(input.confirm.as_deref());
    state.session.lock().await.form.reset(&mut confirmation);
    Redirect::to("/")
}

fn render(template: &impl Template) -> Result<Html<String>, StatusCode> {
    template.render().map(Html).map_err(|e| {
        tracing::error!(error = %e, "Failed to render template");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

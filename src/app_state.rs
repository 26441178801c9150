use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::filter::{FilterParams, JobFilter};
use crate::services::{board::JobBoard, form::FormController};

/// Everything one user session owns: the job list, the form, the active
/// search and category filter, and a one-shot notice shown on the next board
/// render.
pub struct Session {
    pub board: JobBoard,
    pub form: FormController,
    pub filter: FilterParams,
    pub notice: Option<String>,
}

impl Session {
    pub fn new(board: JobBoard) -> Self {
        Self {
            board,
            form: FormController::new(),
            filter: FilterParams::default(),
            notice: None,
        }
    }

    /// Remember submitted filter inputs. A request without any keeps the
    /// filter that is already active, so actions that return to the board
    /// do not drop it.
    pub fn apply_filter(&mut self, params: FilterParams) {
        if !params.is_empty() {
            self.filter = params;
        }
    }

    pub fn active_filter(&self) -> JobFilter {
        JobFilter::from(&self.filter)
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }
}

/// Shared application state passed to all route handlers.
///
/// Each handler holds the session lock for its whole run.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(board: JobBoard) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new(board))),
        }
    }
}

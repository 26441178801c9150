use tracing::debug;

use crate::models::job::{Category, JobDraft};
use crate::services::board::{BoardError, JobBoard};
use crate::services::confirm::Confirm;

pub const RESET_PROMPT: &str = "Reset form?";

/// What a form submission did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(String),
    Updated(String),
    /// The record being edited was deleted in the meantime.
    Missing(String),
}

/// Form state: the input field values plus the editing target.
#[derive(Debug, Clone)]
pub struct FormController {
    fields: JobDraft,
    editing: Option<String>,
}

impl Default for FormController {
    fn default() -> Self {
        Self {
            fields: blank_fields(),
            editing: None,
        }
    }
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &JobDraft {
        &self.fields
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Job"
        } else {
            "Add Job"
        }
    }

    /// Replace the input field values, keeping the editing target.
    pub fn set_fields(&mut self, fields: JobDraft) {
        self.fields = fields;
    }

    /// Load an existing record into the form. Unknown ids are ignored.
    pub fn start_edit(&mut self, board: &JobBoard, id: &str) -> bool {
        let Some(job) = board.get(id) else {
            debug!(job_id = %id, "Edit target no longer exists");
            return false;
        };
        self.fields = JobDraft::new(
            job.title.clone(),
            job.company.clone(),
            job.category.clone(),
            job.desc.clone(),
        );
        self.editing = Some(job.id.clone());
        true
    }

    /// Create or update from the current field values.
    ///
    /// A rejected draft leaves the fields and the editing target as typed;
    /// any other outcome clears the form.
    pub fn submit(&mut self, board: &mut JobBoard) -> Result<SubmitOutcome, BoardError> {
        let draft = self.fields.clone();
        let result = match self.editing.as_deref() {
            Some(id) => board.update(id, draft).map(|updated| match updated {
                Some(job) => SubmitOutcome::Updated(job.id.clone()),
                None => SubmitOutcome::Missing(id.to_string()),
            }),
            None => board
                .create(draft)
                .map(|job| SubmitOutcome::Created(job.id.clone())),
        };
        if !matches!(result, Err(BoardError::Validation)) {
            self.clear();
        }
        result
    }

    /// Clear the form once the confirmer accepts.
    pub fn reset(&mut self, confirmer: &mut impl Confirm) -> bool {
        if !confirmer.confirm(RESET_PROMPT).is_accepted() {
            return false;
        }
        self.clear();
        true
    }

    fn clear(&mut self) {
        self.fields = blank_fields();
        self.editing = None;
    }
}

fn blank_fields() -> JobDraft {
    JobDraft::new("", "", Category::default().to_string(), "")
}

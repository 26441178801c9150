//! Declarative views: session state in, HTML out.
//!
//! Per-record actions are plain links and forms addressed by record id, so
//! nothing has to be re-bound after a render.

use askama::Template;
use chrono::DateTime;

use crate::app_state::Session;
use crate::models::filter::ALL_CATEGORIES;
use crate::models::job::{Category, JobRecord};
use crate::services::filter::{count_label, filter_jobs};

pub const EMPTY_PLACEHOLDER: &str = "No jobs yet — add one!";

pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub struct FormView {
    pub title: String,
    pub company: String,
    pub desc: String,
    pub categories: Vec<SelectOption>,
    pub submit_label: &'static str,
    pub editing: bool,
}

pub struct JobCard {
    pub id: String,
    pub initial: String,
    pub title: String,
    pub company: String,
    pub category: String,
    pub posted: String,
    pub desc: String,
}

impl From<&JobRecord> for JobCard {
    fn from(job: &JobRecord) -> Self {
        Self {
            id: job.id.clone(),
            initial: job.initial(),
            title: job.title.clone(),
            company: job.company.clone(),
            category: job.category.clone(),
            posted: format_posted(job.posted),
            desc: job.desc.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardPage {
    pub notice: Option<String>,
    pub form: FormView,
    pub query: String,
    pub filter_options: Vec<SelectOption>,
    pub status: String,
    pub cards: Vec<JobCard>,
    pub placeholder: &'static str,
}

impl BoardPage {
    /// Render state for the board under the session's active filter. Takes
    /// the pending notice out of the session so it is shown once.
    pub fn build(session: &mut Session) -> Self {
        let filter = session.active_filter();
        let visible = filter_jobs(session.board.jobs(), &filter);
        let form = &session.form;
        let fields = form.fields();

        let form = FormView {
            title: fields.title.clone(),
            company: fields.company.clone(),
            desc: fields.desc.clone(),
            categories: category_options(&fields.category, false),
            submit_label: form.submit_label(),
            editing: form.is_editing(),
        };

        Self {
            notice: session.notice.take(),
            form,
            query: session.filter.query().to_string(),
            filter_options: category_options(filter.category.as_str(), true),
            status: count_label(visible.len()),
            cards: visible.into_iter().map(JobCard::from).collect(),
            placeholder: EMPTY_PLACEHOLDER,
        }
    }
}

#[derive(Template)]
#[template(path = "confirm.html")]
pub struct ConfirmPage {
    pub prompt: &'static str,
    pub action: String,
}

fn category_options(selected: &str, with_all: bool) -> Vec<SelectOption> {
    let mut options = Vec::new();
    if with_all {
        options.push(SelectOption {
            value: ALL_CATEGORIES.to_string(),
            label: "All categories".to_string(),
            selected: selected == ALL_CATEGORIES,
        });
    }
    options.extend(Category::names().into_iter().map(|name| SelectOption {
        selected: name == selected,
        label: name.clone(),
        value: name,
    }));
    options
}

fn format_posted(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_default()
}

use chrono::Utc;
use garde::Validate;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::job::{JobDraft, JobRecord};
use crate::services::confirm::Confirm;
use crate::services::storage::{SnapshotStore, StorageError};

pub const DELETE_PROMPT: &str = "Delete this job?";

/// The session's job list and the snapshot it is mirrored to.
///
/// The list is ordered newest-created first. Every successful mutation
/// persists the whole list before returning.
pub struct JobBoard {
    jobs: Vec<JobRecord>,
    store: SnapshotStore,
}

impl JobBoard {
    /// Load the stored snapshot and take ownership of it for the session.
    pub fn open(store: SnapshotStore) -> Self {
        let jobs = store.load();
        info!(count = jobs.len(), key = %store.key(), "Loaded job snapshot");
        metrics::gauge!("jobs_stored").set(jobs.len() as f64);
        Self { jobs, store }
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&JobRecord> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Validate and prepend a new record.
    pub fn create(&mut self, draft: JobDraft) -> Result<&JobRecord, BoardError> {
        let draft = validated(draft)?;
        let job = JobRecord {
            id: self.fresh_id(),
            title: draft.title,
            company: draft.company,
            category: draft.category,
            desc: draft.desc,
            posted: now_millis(),
            updated: None,
        };
        info!(job_id = %job.id, category = %job.category, "Job created");
        self.jobs.insert(0, job);
        self.persist()?;
        metrics::counter!("jobs_created_total").increment(1);
        Ok(&self.jobs[0])
    }

    /// Replace the mutable fields of an existing record in place.
    ///
    /// Returns `Ok(None)` when no record has `id`.
    pub fn update(&mut self, id: &str, draft: JobDraft) -> Result<Option<&JobRecord>, BoardError> {
        let draft = validated(draft)?;
        let Some(idx) = self.jobs.iter().position(|j| j.id == id) else {
            debug!(job_id = %id, "Update target no longer exists");
            return Ok(None);
        };

        let job = &mut self.jobs[idx];
        let floor = job.updated.unwrap_or(job.posted);
        job.title = draft.title;
        job.company = draft.company;
        job.category = draft.category;
        job.desc = draft.desc;
        job.updated = Some(now_millis().max(floor));
        info!(job_id = %id, "Job updated");

        self.persist()?;
        metrics::counter!("jobs_updated_total").increment(1);
        Ok(Some(&self.jobs[idx]))
    }

    /// Remove the record with `id` once the confirmer accepts.
    ///
    /// Returns the removed record; `None` when declined or not found.
    pub fn delete(
        &mut self,
        id: &str,
        confirmer: &mut impl Confirm,
    ) -> Result<Option<JobRecord>, BoardError> {
        if !confirmer.confirm(DELETE_PROMPT).is_accepted() {
            debug!(job_id = %id, "Delete declined");
            return Ok(None);
        }
        let Some(idx) = self.jobs.iter().position(|j| j.id == id) else {
            debug!(job_id = %id, "Delete target no longer exists");
            return Ok(None);
        };

        let removed = self.jobs.remove(idx);
        info!(job_id = %id, "Job deleted");
        self.persist()?;
        metrics::counter!("jobs_deleted_total").increment(1);
        Ok(Some(removed))
    }

    fn persist(&mut self) -> Result<(), BoardError> {
        metrics::gauge!("jobs_stored").set(self.jobs.len() as f64);
        self.store.save(&self.jobs).map_err(BoardError::Storage)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

fn validated(draft: JobDraft) -> Result<JobDraft, BoardError> {
    let draft = draft.trimmed();
    if let Err(report) = draft.validate() {
        debug!(%report, "Rejected job draft");
        metrics::counter!("job_validation_failures_total").increment(1);
        return Err(BoardError::Validation);
    }
    Ok(draft)
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("Please enter title and company.")]
    Validation,

    #[error("Failed to save jobs: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::confirm::Confirmation;
    use std::collections::HashSet;

    fn board() -> JobBoard {
        JobBoard::open(SnapshotStore::in_memory())
    }

    fn draft(title: &str, company: &str, category: &str) -> JobDraft {
        JobDraft::new(title, company, category, "")
    }

    fn seeded() -> (JobBoard, Vec<String>) {
        let mut board = board();
        let mut ids = Vec::new();
        for (title, cat) in [("Engineer", "IT"), ("Account Exec", "Sales"), ("Designer", "Design")] {
            ids.push(board.create(draft(title, "Acme", cat)).unwrap().id.clone());
        }
        (board, ids)
    }

    #[test]
    fn test_create_prepends_and_persists() {
        let mut board = board();
        board.create(draft("First", "Acme", "IT")).unwrap();
        let job = board
            .create(JobDraft::new("  Engineer ", " Acme ", "IT", " builds things "))
            .unwrap()
            .clone();

        assert_eq!(board.jobs()[0], job);
        assert_eq!(job.title, "Engineer");
        assert_eq!(job.company, "Acme");
        assert_eq!(job.desc, "builds things");
        assert_eq!(job.updated, None);
        assert_eq!(board.store().load(), board.jobs());
    }

    #[test]
    fn test_create_round_trip() {
        let mut board = board();
        let job = board.create(draft("Engineer", "Acme", "IT")).unwrap().clone();
        assert_eq!(board.store().load()[0], job);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut board = board();
        for i in 0..50 {
            board.create(draft(&format!("Job {i}"), "Acme", "IT")).unwrap();
        }
        let ids: HashSet<_> = board.jobs().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_create_requires_title_and_company() {
        let (mut board, _) = seeded();
        let before = board.store().raw().unwrap();

        assert!(matches!(
            board.create(draft("", "Acme", "IT")),
            Err(BoardError::Validation)
        ));
        assert!(matches!(
            board.create(draft("Title", "   ", "IT")),
            Err(BoardError::Validation)
        ));
        assert_eq!(board.len(), 3);
        assert_eq!(board.store().raw().unwrap(), before);
    }

    #[test]
    fn test_update_in_place() {
        let (mut board, ids) = seeded();
        let original = board.get(&ids[1]).unwrap().clone();

        let updated = board
            .update(&ids[1], JobDraft::new("Sales Lead", "Globex", "Marketing", "remote"))
            .unwrap()
            .unwrap()
            .clone();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.posted, original.posted);
        assert_eq!(updated.title, "Sales Lead");
        assert_eq!(updated.company, "Globex");
        assert_eq!(updated.category, "Marketing");
        assert_eq!(updated.desc, "remote");
        assert!(updated.updated.unwrap() >= original.posted);
        assert_eq!(board.jobs()[1].id, ids[1]);
        assert_eq!(board.store().load(), board.jobs());
    }

    #[test]
    fn test_updated_never_decreases() {
        let (mut board, ids) = seeded();
        let first = board.update(&ids[0], draft("A", "B", "IT")).unwrap().unwrap().updated;
        let second = board.update(&ids[0], draft("C", "D", "IT")).unwrap().unwrap().updated;
        assert!(second >= first);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let (mut board, _) = seeded();
        let before = board.store().raw().unwrap();
        let jobs = board.jobs().to_vec();

        assert!(board.update("gone", draft("X", "Y", "IT")).unwrap().is_none());
        assert_eq!(board.jobs(), jobs.as_slice());
        assert_eq!(board.store().raw().unwrap(), before);
    }

    #[test]
    fn test_update_requires_title_and_company() {
        let (mut board, ids) = seeded();
        let jobs = board.jobs().to_vec();
        assert!(matches!(
            board.update(&ids[0], draft("", "Acme", "IT")),
            Err(BoardError::Validation)
        ));
        assert_eq!(board.jobs(), jobs.as_slice());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let (mut board, ids) = seeded();
        let removed = board
            .delete(&ids[1], &mut Confirmation::Accepted)
            .unwrap()
            .unwrap();
        assert_eq!(removed.id, ids[1]);

        let remaining: Vec<_> = board.jobs().iter().map(|j| j.id.clone()).collect();
        assert_eq!(remaining, vec![ids[2].clone(), ids[0].clone()]);
        assert_eq!(board.store().load(), board.jobs());
    }

    #[test]
    fn test_delete_declined_keeps_state() {
        let (mut board, ids) = seeded();
        let before = board.store().raw().unwrap();
        let mut asked = 0;
        let result = board
            .delete(&ids[0], &mut |prompt: &str| {
                assert_eq!(prompt, DELETE_PROMPT);
                asked += 1;
                false
            })
            .unwrap();
        assert!(result.is_none());
        assert_eq!(asked, 1);
        assert_eq!(board.len(), 3);
        assert_eq!(board.store().raw().unwrap(), before);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let (mut board, _) = seeded();
        let jobs = board.jobs().to_vec();
        assert!(board
            .delete("gone", &mut Confirmation::Accepted)
            .unwrap()
            .is_none());
        assert_eq!(board.jobs(), jobs.as_slice());
    }

    #[test]
    fn test_reopen_restores_list() {
        let (board, _) = seeded();
        let raw = board.store().raw().unwrap().unwrap();
        let mut kv = crate::services::storage::MemoryStore::new();
        crate::services::storage::KeyValueStore::set(&mut kv, "simple_jobs_v1", &raw).unwrap();

        let reopened = JobBoard::open(SnapshotStore::new(kv, "simple_jobs_v1"));
        assert_eq!(reopened.jobs(), board.jobs());
    }
}

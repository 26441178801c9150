use crate::models::filter::JobFilter;
use crate::models::job::JobRecord;

/// Whether a record passes the category selector and contains the query in
/// its title, company, or description (case-insensitive).
pub fn matches(job: &JobRecord, filter: &JobFilter) -> bool {
    if !filter.category.accepts(&job.category) {
        return false;
    }
    let haystack = format!("{} {} {}", job.title, job.company, job.desc).to_lowercase();
    haystack.contains(&filter.query)
}

/// The visible subset, in list order.
pub fn filter_jobs<'a>(jobs: &'a [JobRecord], filter: &JobFilter) -> Vec<&'a JobRecord> {
    jobs.iter().filter(|job| matches(job, filter)).collect()
}

/// Status line text, e.g. "1 job" or "3 jobs".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 job".to_string()
    } else {
        format!("{count} jobs")
    }
}

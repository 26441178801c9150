//! Test helpers: run the router on an ephemeral port and talk to it over HTTP

use serde::Deserialize;
use tokio::net::TcpListener;

use job_board::app_state::AppState;
use job_board::models::job::JobRecord;
use job_board::routes;
use job_board::services::board::JobBoard;
use job_board::services::storage::SnapshotStore;

use crate::fixtures::JobFixture;

/// Response from GET /api/jobs
#[derive(Debug, Deserialize)]
pub struct JobListResponse {
    pub count: usize,
    pub status: String,
    pub jobs: Vec<JobRecord>,
}

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub state: AppState,
}

/// Start the app over `store` in the background.
pub async fn spawn_app(store: SnapshotStore) -> TestApp {
    let state = AppState::new(JobBoard::open(store));
    let app = routes::router(state.clone(), None);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });

    TestApp {
        base_url: format!("http://{addr}"),
        client: reqwest::Client::new(),
        state,
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a page and return its body, following redirects.
    pub async fn page(&self, path: &str) -> String {
        let response = self.client.get(self.url(path)).send().await.expect("GET failed");
        assert!(response.status().is_success(), "GET {path}: {}", response.status());
        response.text().await.expect("Body not text")
    }

    /// POST a form and return the page it redirects to.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> String {
        let response = self
            .client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST failed");
        assert!(response.status().is_success(), "POST {path}: {}", response.status());
        response.text().await.expect("Body not text")
    }

    pub async fn submit(&self, job: &JobFixture) -> String {
        self.post_form("/jobs", &job.form()).await
    }

    pub async fn list(&self, query: &str) -> JobListResponse {
        self.client
            .get(self.url(&format!("/api/jobs{query}")))
            .send()
            .await
            .expect("GET /api/jobs failed")
            .json()
            .await
            .expect("Invalid job list JSON")
    }
}

//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers backed by a temporary data
//! file and a mock GitHub API, and for making HTTP requests against them.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use feedback_api::{create_app, create_app_state};
use feedback_common::{AppConfig, SignatureVerifier};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Webhook secret shared by every test server
pub const TEST_SECRET: &str = "integration-webhook-secret";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Stand-in for the GitHub REST API
    pub github: MockServer,
    data_file: PathBuf,
    _dir: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with an empty store
    pub async fn start() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let data_file = dir.path().join("feedback-data.json");
        let github = MockServer::start().await;

        let config = test_config(&data_file, &github.uri())?;
        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            github,
            data_file,
            _dir: dir,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Path of the JSON data file backing this server
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with a raw JSON body
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?)
    }

    /// Deliver a correctly signed webhook
    pub async fn deliver<T: Serialize>(&self, event: &str, payload: &T) -> Result<Response> {
        let body = serde_json::to_vec(payload)?;
        let signature = sign(&body);
        self.deliver_raw(event, body, Some(&signature)).await
    }

    /// Deliver a webhook with an explicit signature header, or none
    pub async fn deliver_raw(
        &self,
        event: &str,
        body: Vec<u8>,
        signature: Option<&str>,
    ) -> Result<Response> {
        let url = format!("{}/webhook", self.base_url());
        let mut request = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .header("x-github-event", event)
            .header("x-github-delivery", "b0e7a4c0-0000-4000-8000-000000000000")
            .body(body);
        if let Some(signature) = signature {
            request = request.header("x-hub-signature-256", signature);
        }
        Ok(request.send().await?)
    }

    /// Serve `reactions` for one comment from the mock GitHub API
    pub async fn mock_reactions(&self, repository: &str, comment_id: u64, reactions: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(reactions_path(repository, comment_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(reactions))
            .mount(&self.github)
            .await;
    }

    /// Answer one comment's reactions request with a bare status
    pub async fn mock_reactions_status(&self, repository: &str, comment_id: u64, status: u16) {
        Mock::given(method("GET"))
            .and(path(reactions_path(repository, comment_id)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.github)
            .await;
    }
}

fn reactions_path(repository: &str, comment_id: u64) -> String {
    format!("/repos/{repository}/issues/comments/{comment_id}/reactions")
}

/// Create a test configuration
pub fn test_config(data_file: &Path, github_url: &str) -> Result<AppConfig> {
    let data_file = data_file.display().to_string();
    let github_url = github_url.to_string();

    let config = AppConfig::from_lookup(|key| match key {
        "WEBHOOK_SECRET" => Some(TEST_SECRET.to_string()),
        "DATA_FILE" => Some(data_file.clone()),
        "GITHUB_API_URL" => Some(github_url.clone()),
        "GITHUB_TIMEOUT_SECS" => Some("5".to_string()),
        "BATCH_DELAY_MS" => Some("0".to_string()),
        _ => None,
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Signature header value for `body` under the test secret
pub fn sign(body: &[u8]) -> String {
    SignatureVerifier::new(TEST_SECRET).sign(body)
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

//! Shared fixtures for service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{json, Value};

use feedback_common::auth::SignatureVerifier;
use feedback_core::entities::{Reaction, TrackedComment};
use feedback_core::error::FetchError;
use feedback_core::traits::{CommentRepository, ReactionSource};
use feedback_core::value_objects::{CommentId, CommentKind, RepositoryName};
use feedback_store::JsonFileCommentRepository;

use crate::services::{ServiceContext, ServiceContextBuilder};

pub const SECRET: &str = "test-webhook-secret";
pub const MARKER_BODY: &str = "## 🔍 Duplicate Logic Detection\n\nTwo functions look alike.";

/// Reaction source answering from a per-id script
#[derive(Default)]
pub struct StubReactionSource {
    responses: Mutex<HashMap<CommentId, Result<Vec<Reaction>, FetchError>>>,
    calls: AtomicUsize,
    requested: Mutex<Vec<(CommentId, CommentKind)>>,
}

impl StubReactionSource {
    pub fn respond(&self, id: u64, response: Result<Vec<Reaction>, FetchError>) {
        self.responses
            .lock()
            .unwrap()
            .insert(CommentId::new(id), response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every `(id, kind)` asked for, in call order
    pub fn requested(&self) -> Vec<(CommentId, CommentKind)> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReactionSource for StubReactionSource {
    async fn fetch_reactions(
        &self,
        _repository: &RepositoryName,
        kind: CommentKind,
        comment_id: CommentId,
        _token: &str,
    ) -> Result<Vec<Reaction>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push((comment_id, kind));
        self.responses
            .lock()
            .unwrap()
            .get(&comment_id)
            .cloned()
            .unwrap_or(Ok(Vec::new()))
    }
}

pub struct TestEnv {
    pub ctx: ServiceContext,
    pub repo: Arc<JsonFileCommentRepository>,
    pub source: Arc<StubReactionSource>,
    pub dir: tempfile::TempDir,
}

pub fn test_env() -> TestEnv {
    test_env_with_delay(Duration::ZERO)
}

pub fn test_env_with_delay(delay: Duration) -> TestEnv {
    let dir = tempfile::tempdir().unwrap();
    let repo = Arc::new(JsonFileCommentRepository::new(dir.path().join("feedback-data.json")));
    let source = Arc::new(StubReactionSource::default());

    let ctx = ServiceContextBuilder::new()
        .comment_repo(repo.clone())
        .reaction_source(source.clone())
        .verifier(SignatureVerifier::new(SECRET))
        .batch_delay(delay)
        .build()
        .unwrap();

    TestEnv {
        ctx,
        repo,
        source,
        dir,
    }
}

pub fn reactions(contents: &[&str]) -> Vec<Reaction> {
    contents
        .iter()
        .enumerate()
        .map(|(i, c)| Reaction::new(*c, format!("user-{i}"), Utc::now()))
        .collect()
}

pub fn tracked(id: u64) -> TrackedComment {
    TrackedComment::new(
        CommentId::new(id),
        RepositoryName::parse("octo/widgets").unwrap(),
        7,
        "detector-bot".to_string(),
        format!("https://github.com/octo/widgets/pull/7#issuecomment-{id}"),
        MARKER_BODY,
        Utc::now(),
    )
}

pub async fn seed(repo: &JsonFileCommentRepository, ids: &[u64]) {
    for &id in ids {
        repo.upsert(tracked(id)).await.unwrap();
    }
}

/// Issue comment event payload
pub fn comment_event(id: u64, action: &str, body: &str) -> Value {
    json!({
        "action": action,
        "comment": {
            "id": id,
            "body": body,
            "html_url": format!("https://github.com/octo/widgets/pull/7#issuecomment-{id}"),
            "created_at": "2026-10-01T12:00:00Z",
            "user": { "login": "detector-bot" }
        },
        "issue": { "number": 7 },
        "repository": { "full_name": "octo/widgets" }
    })
}

pub fn sign(body: &[u8]) -> String {
    SignatureVerifier::new(SECRET).sign(body)
}

//! Test fixtures and data generators
//!
//! Webhook payloads, reaction lists and request bodies.

use serde::Serialize;
use serde_json::{json, Value};

/// Repository every fixture comment belongs to
pub const REPOSITORY: &str = "octo/widgets";

/// Body of a comment the default classifier tracks
pub const TRACKED_BODY: &str =
    "## 🔍 Duplicate Logic Detection\n\n`parse_a` and `parse_b` look alike.\n\nReact with 👍 or 👎";

/// `issue_comment` delivery for a new comment
pub fn issue_comment_event(id: u64, body: &str) -> Value {
    json!({
        "action": "created",
        "comment": {
            "id": id,
            "body": body,
            "html_url": format!("https://github.com/{REPOSITORY}/pull/7#issuecomment-{id}"),
            "created_at": "2026-10-01T12:00:00Z",
            "user": { "login": "detector-bot" }
        },
        "issue": { "number": 7 },
        "repository": { "full_name": REPOSITORY }
    })
}

/// `pull_request_review_comment` delivery for a new comment
pub fn review_comment_event(id: u64, pull_number: u64, body: &str) -> Value {
    json!({
        "action": "created",
        "comment": {
            "id": id,
            "body": body,
            "html_url": format!("https://github.com/{REPOSITORY}/pull/{pull_number}#discussion_r{id}"),
            "created_at": "2026-10-01T12:00:00Z",
            "user": { "login": "detector-bot" }
        },
        "pull_request": { "number": pull_number },
        "repository": { "full_name": REPOSITORY }
    })
}

/// GitHub reaction list with one reaction per `content`
pub fn reaction_list(contents: &[&str]) -> Value {
    Value::Array(
        contents
            .iter()
            .enumerate()
            .map(|(i, content)| {
                json!({
                    "id": i + 1,
                    "content": content,
                    "user": { "login": format!("reviewer-{i}") },
                    "created_at": "2026-10-02T08:30:00Z"
                })
            })
            .collect(),
    )
}

/// Single refresh request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReactionsBody<'a> {
    pub comment_id: Value,
    pub token: &'a str,
}

impl<'a> UpdateReactionsBody<'a> {
    pub fn new(comment_id: u64, token: &'a str) -> Self {
        Self {
            comment_id: json!(comment_id),
            token,
        }
    }
}

/// Batch refresh request body
#[derive(Debug, Serialize)]
pub struct UpdateAllBody<'a> {
    pub token: &'a str,
}

//! Webhook delivery and payload shapes

use chrono::{DateTime, Utc};
use serde::Deserialize;

use feedback_core::value_objects::{CommentId, CommentKind};

/// Header naming the event type
pub const EVENT_HEADER: &str = "x-github-event";

/// Header carrying the unique delivery id
pub const DELIVERY_HEADER: &str = "x-github-delivery";

/// Action value of the only tracked transition
pub const CREATED_ACTION: &str = "created";

/// One inbound delivery as received, before verification
#[derive(Debug, Clone, Copy)]
pub struct WebhookDelivery<'a> {
    pub event: Option<&'a str>,
    pub delivery_id: Option<&'a str>,
    pub signature: Option<&'a str>,
    pub body: &'a [u8],
}

/// Comment events that can create a tracked record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentEvent {
    IssueComment,
    PullRequestReviewComment,
}

impl CommentEvent {
    pub fn from_header(event: &str) -> Option<Self> {
        match event {
            "issue_comment" => Some(Self::IssueComment),
            "pull_request_review_comment" => Some(Self::PullRequestReviewComment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IssueComment => "issue_comment",
            Self::PullRequestReviewComment => "pull_request_review_comment",
        }
    }

    /// Comment collection the event's comment belongs to
    pub fn comment_kind(self) -> CommentKind {
        match self {
            Self::IssueComment => CommentKind::Issue,
            Self::PullRequestReviewComment => CommentKind::ReviewComment,
        }
    }
}

/// Minimal view used to route a delivery before strict parsing
#[derive(Debug, Deserialize)]
pub struct ActionEnvelope {
    #[serde(default)]
    pub action: Option<String>,
}

/// A `created` comment event with every field a record needs
#[derive(Debug, Deserialize)]
pub struct CommentCreatedPayload {
    pub comment: CommentPayload,
    #[serde(default)]
    pub issue: Option<ThreadPayload>,
    #[serde(default)]
    pub pull_request: Option<ThreadPayload>,
    pub repository: RepositoryPayload,
}

#[derive(Debug, Deserialize)]
pub struct CommentPayload {
    pub id: CommentId,
    pub body: String,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub user: UserPayload,
}

#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct ThreadPayload {
    pub number: u64,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryPayload {
    pub full_name: String,
}

impl CommentCreatedPayload {
    /// Issue or pull request number the comment belongs to
    pub fn thread_number(&self, event: CommentEvent) -> Option<u64> {
        let thread = match event {
            CommentEvent::IssueComment => self.issue.as_ref(),
            CommentEvent::PullRequestReviewComment => self.pull_request.as_ref(),
        };
        thread.map(|t| t.number)
    }
}

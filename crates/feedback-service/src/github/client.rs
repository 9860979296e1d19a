//! Reaction fetcher backed by the GitHub REST API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT as USER_AGENT_HEADER};
use reqwest::StatusCode;
use tracing::{debug, instrument, warn};

use feedback_common::config::GitHubConfig;
use feedback_core::entities::Reaction;
use feedback_core::error::FetchError;
use feedback_core::traits::ReactionSource;
use feedback_core::value_objects::{CommentId, CommentKind, RepositoryName};

use super::models::RawReaction;

/// REST API version pinned in every request
pub const API_VERSION: &str = "2022-11-28";

/// Fixed user agent; the API rejects requests without one
pub const USER_AGENT: &str = concat!("reaction-feedback/", env!("CARGO_PKG_VERSION"));

/// Page size requested from the reactions endpoint
pub const PER_PAGE: usize = 100;

/// Upper bound on pages fetched for one comment
pub const MAX_PAGES: usize = 10;

/// GitHub reactions client.
///
/// The access token is supplied per call and never stored on the client.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &GitHubConfig) -> Result<Self, FetchError> {
        Self::new(config.api_url.clone(), config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue comments and review comments live in separate collections
    fn reactions_url(
        &self,
        repository: &RepositoryName,
        kind: CommentKind,
        comment_id: CommentId,
    ) -> String {
        format!(
            "{}/repos/{}/{}/{}/{}/reactions",
            self.base_url,
            repository.owner(),
            repository.name(),
            kind.api_collection(),
            comment_id
        )
    }

    async fn fetch_page(
        &self,
        url: &str,
        token: &str,
        page: usize,
    ) -> Result<Vec<RawReaction>, FetchError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(&[("per_page", PER_PAGE), ("page", page)])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        debug!(status = %status, page, "Reactions page received");

        match status {
            s if s.is_success() => {}
            StatusCode::UNAUTHORIZED => return Err(FetchError::Unauthorized),
            StatusCode::FORBIDDEN => {
                let remaining = response
                    .headers()
                    .get("x-ratelimit-remaining")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("?");
                warn!(rate_limit_remaining = %remaining, "GitHub refused the request");
                return Err(FetchError::Forbidden);
            }
            StatusCode::NOT_FOUND => return Err(FetchError::NotFound),
            other => return Err(FetchError::Status(other.as_u16())),
        }

        response.json::<Vec<RawReaction>>().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Decode(e.to_string())
            }
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(e.without_url().to_string())
    }
}

#[async_trait]
impl ReactionSource for GitHubClient {
    #[instrument(skip(self, token))]
    async fn fetch_reactions(
        &self,
        repository: &RepositoryName,
        kind: CommentKind,
        comment_id: CommentId,
        token: &str,
    ) -> Result<Vec<Reaction>, FetchError> {
        let url = self.reactions_url(repository, kind, comment_id);
        let mut reactions = Vec::new();

        for page in 1..=MAX_PAGES {
            let batch = self.fetch_page(&url, token, page).await?;
            let last_page = batch.len() < PER_PAGE;
            reactions.extend(batch.into_iter().map(Reaction::from));
            if last_page {
                break;
            }
        }

        debug!(count = reactions.len(), "Reactions fetched");
        Ok(reactions)
    }
}

//! Service context - dependency container for services
//!
//! Holds the record store, the reaction source, the classifier and the other
//! shared pieces the services need.

use std::sync::Arc;
use std::time::{Duration, Instant};

use feedback_common::auth::SignatureVerifier;
use feedback_core::classifier::{CommentClassifier, MarkerClassifier};
use feedback_core::traits::{CommentRepository, ReactionSource};
use feedback_store::CommentLocks;

use super::error::{ServiceError, ServiceResult};

/// Courtesy delay between external calls during a batch refresh
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(1000);

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// It provides access to:
/// - The record store and its per-id mutation locks
/// - The external reaction source
/// - The comment classifier and webhook signature verifier
#[derive(Clone)]
pub struct ServiceContext {
    // Record store
    comment_repo: Arc<dyn CommentRepository>,
    locks: CommentLocks,

    // External API
    reaction_source: Arc<dyn ReactionSource>,

    // Ingestion
    classifier: Arc<dyn CommentClassifier>,
    verifier: Arc<SignatureVerifier>,

    // Settings
    batch_delay: Duration,
    started_at: Instant,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        reaction_source: Arc<dyn ReactionSource>,
        classifier: Arc<dyn CommentClassifier>,
        verifier: Arc<SignatureVerifier>,
        batch_delay: Duration,
    ) -> Self {
        Self {
            comment_repo,
            locks: CommentLocks::new(),
            reaction_source,
            classifier,
            verifier,
            batch_delay,
            started_at: Instant::now(),
        }
    }

    // === Record Store ===

    /// Get the tracked comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the per-comment mutation locks
    pub fn locks(&self) -> &CommentLocks {
        &self.locks
    }

    // === External API ===

    /// Get the reaction source
    pub fn reaction_source(&self) -> &dyn ReactionSource {
        self.reaction_source.as_ref()
    }

    // === Ingestion ===

    pub fn classifier(&self) -> &dyn CommentClassifier {
        self.classifier.as_ref()
    }

    pub fn verifier(&self) -> &SignatureVerifier {
        self.verifier.as_ref()
    }

    // === Settings ===

    /// Delay inserted between successive fetches of a batch refresh
    pub fn batch_delay(&self) -> Duration {
        self.batch_delay
    }

    /// Time since this context was created
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("comment_repo", &"...")
            .field("reaction_source", &"...")
            .field("verifier", &self.verifier)
            .field("batch_delay", &self.batch_delay)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_source: Option<Arc<dyn ReactionSource>>,
    classifier: Option<Arc<dyn CommentClassifier>>,
    verifier: Option<Arc<SignatureVerifier>>,
    batch_delay: Duration,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            comment_repo: None,
            reaction_source: None,
            classifier: None,
            verifier: None,
            batch_delay: DEFAULT_BATCH_DELAY,
        }
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_source(mut self, source: Arc<dyn ReactionSource>) -> Self {
        self.reaction_source = Some(source);
        self
    }

    /// Defaults to the built-in marker classifier
    pub fn classifier(mut self, classifier: Arc<dyn CommentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn verifier(mut self, verifier: SignatureVerifier) -> Self {
        self.verifier = Some(Arc::new(verifier));
        self
    }

    pub fn batch_delay(mut self, delay: Duration) -> Self {
        self.batch_delay = delay;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.comment_repo
                .ok_or_else(|| ServiceError::internal("comment_repo is required"))?,
            self.reaction_source
                .ok_or_else(|| ServiceError::internal("reaction_source is required"))?,
            self.classifier
                .unwrap_or_else(|| Arc::new(MarkerClassifier::default())),
            self.verifier
                .ok_or_else(|| ServiceError::internal("verifier is required"))?,
            self.batch_delay,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

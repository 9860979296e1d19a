//! JSON file implementation of CommentRepository

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use feedback_core::entities::TrackedComment;
use feedback_core::traits::{CommentRepository, RepoResult, UpsertOutcome};
use feedback_core::value_objects::CommentId;

use crate::models::CommentModel;

use super::error::StoreError;

/// Insertion-ordered table with an id → position index
#[derive(Debug, Default)]
struct Table {
    records: Vec<TrackedComment>,
    index: HashMap<CommentId, usize>,
}

impl Table {
    fn upsert(&mut self, comment: TrackedComment) -> UpsertOutcome {
        match self.index.get(&comment.id) {
            Some(&position) => {
                self.records[position] = comment;
                UpsertOutcome::Replaced
            }
            None => {
                self.index.insert(comment.id, self.records.len());
                self.records.push(comment);
                UpsertOutcome::Inserted
            }
        }
    }

    fn get(&self, id: CommentId) -> Option<&TrackedComment> {
        self.index.get(&id).map(|&position| &self.records[position])
    }
}

/// Record store persisted as one JSON file.
///
/// The in-memory table is authoritative for the running process. `save`
/// rewrites the whole file; concurrent saves are serialized and each one
/// goes through a temporary sibling file renamed over the target, so a
/// reader never observes a half-written snapshot.
#[derive(Debug)]
pub struct JsonFileCommentRepository {
    path: PathBuf,
    table: RwLock<Table>,
    save_lock: Mutex<()>,
}

impl JsonFileCommentRepository {
    /// Create an empty store that will save to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: RwLock::new(Table::default()),
            save_lock: Mutex::new(()),
        }
    }

    /// Open the store at `path`, loading any existing snapshot.
    ///
    /// A missing or unreadable file is not fatal: the store starts empty.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let repo = Self::new(path);
        repo.load().await;
        repo
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory table with the file's contents.
    ///
    /// Returns the number of records loaded. Records are applied in file
    /// order, so a duplicated id keeps its last occurrence.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> usize {
        let models = match read_snapshot(&self.path).await {
            Ok(models) => models,
            Err(e) if e.is_missing_file() => {
                info!("No store file yet, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Store file unreadable, starting empty");
                Vec::new()
            }
        };

        let mut table = Table::default();
        for model in models {
            match TrackedComment::try_from(model) {
                Ok(comment) => {
                    table.upsert(comment);
                }
                Err(e) => warn!(error = %e, "Skipping invalid record"),
            }
        }

        let loaded = table.records.len();
        *self.table.write() = table;
        info!(records = loaded, "Store loaded");
        loaded
    }

    async fn write_snapshot(&self, json: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let tmp = self
            .path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));

        fs::write(&tmp, json)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;

        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(StoreError::io(&self.path, e));
        }

        Ok(())
    }
}

async fn read_snapshot(path: &Path) -> Result<Vec<CommentModel>, StoreError> {
    let bytes = fs::read(path).await.map_err(|e| StoreError::io(path, e))?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl CommentRepository for JsonFileCommentRepository {
    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn upsert(&self, comment: TrackedComment) -> RepoResult<UpsertOutcome> {
        let outcome = self.table.write().upsert(comment);
        debug!(?outcome, "Record upserted");
        Ok(outcome)
    }

    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<TrackedComment>> {
        Ok(self.table.read().get(id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<TrackedComment>> {
        Ok(self.table.read().records.clone())
    }

    async fn ids(&self) -> RepoResult<Vec<CommentId>> {
        Ok(self.table.read().records.iter().map(|c| c.id).collect())
    }

    async fn count(&self) -> RepoResult<usize> {
        Ok(self.table.read().records.len())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn save(&self) -> RepoResult<()> {
        let _guard = self.save_lock.lock().await;

        let snapshot: Vec<CommentModel> = self
            .table
            .read()
            .records
            .iter()
            .map(CommentModel::from)
            .collect();
        let json = serde_json::to_vec_pretty(&snapshot).map_err(StoreError::from)?;

        self.write_snapshot(&json).await?;
        debug!(records = snapshot.len(), "Store saved");
        Ok(())
    }
}

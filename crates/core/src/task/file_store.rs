//! File-based task storage implementation
//!
//! Stores the whole task collection as one JSON array in a file on disk.
//! Every operation re-reads the file, mutates the collection in memory,
//! and rewrites the file in full. There is no cross-request cache and no
//! locking: overlapping writers can both read the same snapshot and the
//! later write wins ("lost update"). Callers that need stronger guarantees
//! must serialize access externally.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;

use super::model::Task;
use super::repository::TaskRepository;
use crate::{Error, Result};

/// File-based task store using JSON
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
    /// Optional seed collection used to materialize a fresh store on
    /// first insert
    seed_path: Option<PathBuf>,
}

impl FileTaskStore {
    /// Create a new FileTaskStore
    ///
    /// The file is not touched until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seed_path: None,
        }
    }

    /// Use the given template file to seed a store that does not exist yet
    pub fn with_seed(mut self, seed_path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(seed_path.into());
        self
    }

    /// Read and parse the backing file
    ///
    /// Returns `None` when the file does not exist, which each operation
    /// interprets differently (empty list, not-found, or seed).
    async fn read_collection(&self) -> Result<Option<Vec<Task>>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Error::storage(err)),
        };
        let tasks = serde_json::from_slice::<Vec<Task>>(&bytes).map_err(Error::corrupt)?;
        Ok(Some(tasks))
    }

    /// Persist the full collection, overwriting the file in place
    ///
    /// Single choke point for the write strategy; swapping in
    /// write-to-temp-then-rename later only touches this function.
    async fn write_collection(&self, tasks: &[Task]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(tasks).map_err(Error::corrupt)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(Error::storage)?;
        }
        fs::write(&self.path, bytes).await.map_err(Error::storage)
    }

    /// Load the seed collection for first-insert materialization
    ///
    /// A missing or unconfigured seed file yields an empty collection; an
    /// unreadable or unparseable one is surfaced as a storage failure.
    async fn load_seed(&self) -> Result<Vec<Task>> {
        let Some(seed_path) = self.seed_path.as_deref() else {
            return Ok(Vec::new());
        };
        match fs::read(seed_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(Error::corrupt),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(Error::storage(err)),
        }
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Shallow-merge `patch` onto `task`: patch fields win, absent fields keep
/// their prior values, explicit `null` overwrites.
///
/// The merge happens on the JSON representation, so a patch may rewrite
/// any field of the stored object, including `id`. Lookup has already
/// happened by the original id at that point.
fn merge_patch(task: &Task, patch: Map<String, Value>) -> Result<Task> {
    let mut merged = serde_json::to_value(task).map_err(Error::corrupt)?;
    if let Value::Object(fields) = &mut merged {
        for (key, value) in patch {
            fields.insert(key, value);
        }
    }
    serde_json::from_value(merged).map_err(|err| Error::InvalidInput(err.to_string()))
}

#[async_trait]
impl TaskRepository for FileTaskStore {
    async fn load_all(&self) -> Result<Vec<Task>> {
        Ok(self.read_collection().await?.unwrap_or_default())
    }

    async fn insert(&self, task: Task) -> Result<Vec<Task>> {
        let mut tasks = match self.read_collection().await? {
            Some(tasks) => tasks,
            None => {
                // First write ever: materialize the store from the seed
                // before appending, matching fresh-deployment behavior.
                let seed = self.load_seed().await?;
                self.write_collection(&seed).await?;
                tracing::info!(path = %self.path.display(), seeded = seed.len(), "materialized task store");
                seed
            }
        };
        tasks.push(task);
        self.write_collection(&tasks).await?;
        Ok(tasks)
    }

    async fn update_by_id(&self, id: &str, patch: Map<String, Value>) -> Result<Task> {
        // An absent file means the task cannot exist; report not-found
        // rather than a storage failure.
        let mut tasks = self
            .read_collection()
            .await?
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;

        let index = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;

        let merged = merge_patch(&tasks[index], patch)?;
        tasks[index] = merged.clone();
        self.write_collection(&tasks).await?;
        Ok(merged)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(Task, usize)> {
        let mut tasks = self
            .read_collection()
            .await?
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;

        let index = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;

        let removed = tasks.remove(index);
        self.write_collection(&tasks).await?;
        Ok((removed, tasks.len()))
    }
}

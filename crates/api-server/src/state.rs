//! Application state

use std::path::PathBuf;
use std::sync::Arc;

use tt_core::task::{FileTaskStore, IdGenerator, TimestampIdGenerator};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_store: FileTaskStore,
    id_generator: Arc<dyn IdGenerator>,
    strict_numeric_ids: bool,
}

impl AppState {
    /// Create a new AppState with the given data directory
    ///
    /// The store lives at `<data_dir>/tasks.json`; a fresh store is seeded
    /// from `seed_file` on first create.
    pub fn new(data_dir: PathBuf, seed_file: PathBuf, strict_numeric_ids: bool) -> Self {
        let task_store = FileTaskStore::new(data_dir.join("tasks.json")).with_seed(seed_file);
        Self::with_store(task_store, Arc::new(TimestampIdGenerator), strict_numeric_ids)
    }

    /// Build state around an existing store and generator (used by tests)
    pub fn with_store(
        task_store: FileTaskStore,
        id_generator: Arc<dyn IdGenerator>,
        strict_numeric_ids: bool,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                task_store,
                id_generator,
                strict_numeric_ids,
            }),
        }
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &FileTaskStore {
        &self.inner.task_store
    }

    /// Generator used to mint ids for new tasks
    pub fn id_generator(&self) -> &dyn IdGenerator {
        self.inner.id_generator.as_ref()
    }

    /// Whether delete accepts only purely numeric ids
    pub fn strict_numeric_ids(&self) -> bool {
        self.inner.strict_numeric_ids
    }
}

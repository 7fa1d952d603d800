//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::model::Task;
use crate::Result;

/// Repository interface for whole-collection task CRUD
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Get all tasks in insertion order; empty if the store was never written
    async fn load_all(&self) -> Result<Vec<Task>>;

    /// Append a task and return the full updated collection
    async fn insert(&self, task: Task) -> Result<Vec<Task>>;

    /// Shallow-merge `patch` onto the task with the given id and return the
    /// merged record
    async fn update_by_id(&self, id: &str, patch: Map<String, Value>) -> Result<Task>;

    /// Remove the task with the given id; returns the removed task and the
    /// remaining count
    async fn delete_by_id(&self, id: &str) -> Result<(Task, usize)>;
}

//! Task API endpoints
//!
//! RESTful API for task CRUD operations over the flatfile store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use tt_core::task::{Task, TaskPriority, TaskRepository, TaskStatus};
use tt_core::Error;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub due_date: Option<String>,
    /// URL produced by the upload side-channel, if the client attached an
    /// image
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskResponse {
    pub message: String,
    pub deleted_task: Task,
    pub remaining_tasks_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

// ============================================================================
// Error mapping
// ============================================================================

fn client_error(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            message: message.into(),
        }),
    )
}

fn store_error(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        Error::TaskNotFound(_) => StatusCode::NOT_FOUND,
        Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
        Error::CorruptStore(_) | Error::StorageUnavailable(_) => {
            tracing::error!(error = %err, "task store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorResponse {
            message: err.to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /tasks - List all tasks
async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<Task>>, (StatusCode, Json<ErrorResponse>)> {
    let tasks = state.task_store().load_all().await.map_err(store_error)?;
    Ok(Json(tasks))
}

/// POST /tasks - Create a new task
///
/// Returns the full updated collection, not just the new task.
async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Vec<Task>>), (StatusCode, Json<ErrorResponse>)> {
    let title = match req.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(client_error("Title is required.")),
    };
    let due_date = match req.due_date {
        Some(due_date) if !due_date.trim().is_empty() => due_date,
        _ => return Err(client_error("Due date is required.")),
    };

    let mut task = Task::new(state.id_generator().generate(), title, due_date);
    if let Some(description) = req.description {
        task = task.with_description(description);
    }
    if let Some(status) = req.status {
        task = task.with_status(status);
    }
    if let Some(priority) = req.priority {
        task = task.with_priority(priority);
    }
    if let Some(image_url) = req.image_url {
        task = task.with_image_url(image_url);
    }

    let tasks = state.task_store().insert(task).await.map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(tasks)))
}

/// PUT /tasks/{id} - Partially update a task
///
/// The body is taken as a raw patch: fields present overwrite, fields
/// absent keep their stored values, explicit `null` overwrites to null.
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<Map<String, Value>>,
) -> Result<Json<Task>, (StatusCode, Json<ErrorResponse>)> {
    let id = id.trim();
    if id.is_empty() {
        return Err(client_error("Task ID is required for update."));
    }

    let merged = state
        .task_store()
        .update_by_id(id, patch)
        .await
        .map_err(store_error)?;
    Ok(Json(merged))
}

/// DELETE /tasks/{id} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteTaskResponse>, (StatusCode, Json<ErrorResponse>)> {
    let id = id.trim();
    if id.is_empty() {
        return Err(client_error("Task ID is required for deletion."));
    }
    if state.strict_numeric_ids() && !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(client_error(
            "Invalid task ID format. Task ID must be numeric.",
        ));
    }

    let (deleted_task, remaining_tasks_count) = state
        .task_store()
        .delete_by_id(id)
        .await
        .map_err(store_error)?;

    Ok(Json(DeleteTaskResponse {
        message: "Task deleted successfully.".to_string(),
        deleted_task,
        remaining_tasks_count,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            axum::routing::put(update_task).delete(delete_task),
        )
}

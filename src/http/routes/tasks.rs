//! Task CRUD routes.
//!
//! Non-numeric ID segments and undecodable bodies are rejected with 400
//! before the store is consulted; missing IDs surface as 404. Nothing here
//! is fatal to the process.

use super::{bad_request, not_found, ApiError};
use crate::tasks::{Task, TaskFields, TaskStore};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::debug;

/// `GET /api/tasks` — every task, insertion order.
pub async fn list(State(store): State<Arc<TaskStore>>) -> Json<Vec<Task>> {
    Json(store.list())
}

/// `POST /api/tasks` — create a task from the request body.
pub async fn create(
    State(store): State<Arc<TaskStore>>,
    body: Result<Json<TaskFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(fields) = body.map_err(bad_request)?;
    let task = store.create(fields);
    debug!(id = task.id, title = %task.title, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /api/tasks/{id}` — replace a task wholesale.
///
/// The path ID and the original `created_at` win over anything in the body.
pub async fn replace(
    State(store): State<Arc<TaskStore>>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<TaskFields>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = id.map_err(|_| bad_request("invalid task id"))?;
    let Json(fields) = body.map_err(bad_request)?;
    let task = store.replace(id, fields).map_err(not_found)?;
    Ok(Json(task))
}

/// `POST /api/tasks/{id}/toggle` — flip completion.
pub async fn toggle(
    State(store): State<Arc<TaskStore>>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = id.map_err(|_| bad_request("invalid task id"))?;
    let task = store.toggle(id).map_err(not_found)?;
    debug!(id = task.id, completed = task.completed, "task toggled");
    Ok(Json(task))
}

/// `DELETE /api/tasks/{id}` — remove a task.
pub async fn delete(
    State(store): State<Arc<TaskStore>>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(|_| bad_request("invalid task id"))?;
    store.delete(id).map_err(not_found)?;
    debug!(id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}

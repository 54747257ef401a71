//! Task API endpoints
//!
//! The widget's interaction surface: list, add, toggle and delete.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use todo_core::task::{AddOutcome, Category, Task};
use todo_core::view::TaskListView;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub text: String,
    /// Category id; ids stored by older widget builds are accepted too
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Category,
    pub label: &'static str,
    pub emoji: &'static str,
    pub is_default: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct CapacityErrorResponse {
    pub error: String,
    pub count: usize,
    pub max: usize,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn internal_error(e: todo_core::Error) -> ApiError {
    tracing::error!("Task store failure: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/categories - Categories offered by the selector
async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryResponse>> {
    let store = state.task_store();
    let default = store.default_category();

    Json(
        store
            .categories()
            .iter()
            .map(|&category| CategoryResponse {
                id: category,
                label: category.label(),
                emoji: category.emoji(),
                is_default: category == default,
            })
            .collect(),
    )
}

/// GET /api/tasks - Grouped task list with capacity indicator
async fn list_tasks(State(state): State<AppState>) -> Json<TaskListView> {
    Json(state.task_store().view().await)
}

/// POST /api/tasks - Add a task
async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Response, ApiError> {
    let category = req
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?;

    let outcome = state
        .task_store()
        .add(&req.text, category)
        .await
        .map_err(internal_error)?;

    let response = match outcome {
        AddOutcome::Added(task) => (StatusCode::CREATED, Json(task)).into_response(),
        AddOutcome::Ignored => StatusCode::NO_CONTENT.into_response(),
        AddOutcome::AtCapacity(notice) => (
            StatusCode::CONFLICT,
            Json(CapacityErrorResponse {
                error: notice.message(),
                count: notice.count,
                max: notice.max,
            }),
        )
            .into_response(),
    };

    Ok(response)
}

/// POST /api/tasks/{id}/toggle - Flip completion
async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, ApiError> {
    let task: Option<Task> = state
        .task_store()
        .toggle(id)
        .await
        .map_err(internal_error)?;

    Ok(match task {
        Some(task) => Json(task).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// DELETE /api/tasks/{id} - Remove a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state
        .task_store()
        .delete(id)
        .await
        .map_err(internal_error)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/categories", get(list_categories))
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}/toggle", post(toggle_task))
        .route("/api/tasks/{id}", delete(delete_task))
}

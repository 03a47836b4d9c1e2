//! Handlers for the `/task` resource.

use axum::extract::State;
use axum::http::StatusCode;
use kanban_core::error::CoreError;
use kanban_core::types::DbId;
use kanban_db::models::task::{CreateTask, Task, UpdateTask};
use kanban_db::repositories::TaskRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// POST /task
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    input.validate()?;
    let task = TaskRepo::create(&state.pool, &input).await?;
    tracing::debug!(task_id = task.id, project_id = task.project_id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /task
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /task/{project_id}
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(tasks))
}

/// PATCH /task/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    input.validate()?;
    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// DELETE /task/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: "Task deleted",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}

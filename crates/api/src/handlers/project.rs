//! Handlers for the `/project` resource.

use axum::extract::State;
use axum::http::StatusCode;
use kanban_core::error::CoreError;
use kanban_core::types::DbId;
use kanban_db::models::project::{CreateProject, Project, ProjectWithTasks, UpdateProject};
use kanban_db::repositories::ProjectRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Path};
use crate::handlers::MessageResponse;
use crate::state::AppState;

/// POST /project
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input.validate()?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::debug!(project_id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /project
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithTasks>>> {
    let projects = ProjectRepo::list_with_tasks(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /project/{id}
///
/// Responds with `null` rather than 404 when the project does not exist.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Option<ProjectWithTasks>>> {
    let project = ProjectRepo::find_with_tasks(&state.pool, id).await?;
    Ok(Json(project))
}

/// PATCH /project/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    input.validate()?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /project/{id}
///
/// Tasks of the project are removed by the database cascade.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::debug!(project_id = id, "Project deleted");
        Ok(Json(MessageResponse {
            message: "Project deleted",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

//! Seams between the sync logic and the HTTP client.
//!
//! [`BoardSync`](crate::board_sync::BoardSync) and
//! [`ProjectsSync`](crate::projects::ProjectsSync) only talk to the server
//! through these traits, so they can run against in-memory fakes.

use async_trait::async_trait;
use kanban_core::types::DbId;
use kanban_db::models::project::{CreateProject, Project, ProjectWithTasks, UpdateProject};
use kanban_db::models::task::{CreateTask, Task, UpdateTask};

use crate::api::{ApiError, KanbanApi};

/// Task operations used by the board.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    async fn list_tasks_by_project(&self, project_id: DbId) -> Result<Vec<Task>, ApiError>;

    async fn create_task(&self, input: &CreateTask) -> Result<Task, ApiError>;

    async fn update_task(&self, id: DbId, input: &UpdateTask) -> Result<Task, ApiError>;

    async fn delete_task(&self, id: DbId) -> Result<(), ApiError>;
}

/// Project operations used by the project list.
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<ProjectWithTasks>, ApiError>;

    async fn create_project(&self, input: &CreateProject) -> Result<Project, ApiError>;

    async fn update_project(&self, id: DbId, input: &UpdateProject) -> Result<Project, ApiError>;

    async fn delete_project(&self, id: DbId) -> Result<(), ApiError>;
}

#[async_trait]
impl TaskGateway for KanbanApi {
    async fn list_tasks_by_project(&self, project_id: DbId) -> Result<Vec<Task>, ApiError> {
        KanbanApi::list_tasks_by_project(self, project_id).await
    }

    async fn create_task(&self, input: &CreateTask) -> Result<Task, ApiError> {
        KanbanApi::create_task(self, input).await
    }

    async fn update_task(&self, id: DbId, input: &UpdateTask) -> Result<Task, ApiError> {
        KanbanApi::update_task(self, id, input).await
    }

    async fn delete_task(&self, id: DbId) -> Result<(), ApiError> {
        KanbanApi::delete_task(self, id).await.map(|_| ())
    }
}

#[async_trait]
impl ProjectGateway for KanbanApi {
    async fn list_projects(&self) -> Result<Vec<ProjectWithTasks>, ApiError> {
        KanbanApi::list_projects(self).await
    }

    async fn create_project(&self, input: &CreateProject) -> Result<Project, ApiError> {
        KanbanApi::create_project(self, input).await
    }

    async fn update_project(&self, id: DbId, input: &UpdateProject) -> Result<Project, ApiError> {
        KanbanApi::update_project(self, id, input).await
    }

    async fn delete_project(&self, id: DbId) -> Result<(), ApiError> {
        KanbanApi::delete_project(self, id).await.map(|_| ())
    }
}

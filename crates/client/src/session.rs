//! The project list and the board of the active project, kept consistent.
//!
//! Changing the active project reloads the board. Creating or deleting a
//! task adjusts the owning project's task count.

use std::sync::Arc;

use kanban_core::types::DbId;
use kanban_db::models::project::Project;
use kanban_db::models::task::Task;

use crate::api::ApiError;
use crate::board::DropEvent;
use crate::board_sync::{BoardSync, MoveOutcome, SyncError, TaskDraft};
use crate::gateway::{ProjectGateway, TaskGateway};
use crate::notice::NoticeSender;
use crate::projects::ProjectsSync;

pub struct KanbanSession<G> {
    projects: ProjectsSync<G>,
    board: BoardSync<G>,
}

impl<G> KanbanSession<G>
where
    G: TaskGateway + ProjectGateway,
{
    pub fn new(gateway: Arc<G>, notices: NoticeSender) -> Self {
        Self {
            projects: ProjectsSync::new(Arc::clone(&gateway), notices.clone()),
            board: BoardSync::new(gateway, notices),
        }
    }

    pub fn projects(&self) -> &ProjectsSync<G> {
        &self.projects
    }

    pub fn board(&self) -> &BoardSync<G> {
        &self.board
    }

    /// Load the project list, then the board of whichever project is active.
    pub async fn start(&self) -> Result<(), SyncError> {
        self.projects.load().await?;
        self.board.load(self.projects.active_id().await).await
    }

    /// Make `id` the active project. Unknown ids leave everything unchanged.
    pub async fn select_project(&self, id: DbId) -> Result<(), SyncError> {
        if !self.projects.select(id).await {
            tracing::debug!(project_id = id, "Ignoring selection of unknown project");
            return Ok(());
        }
        self.board.load(Some(id)).await
    }

    pub async fn add_project(&self, name: impl Into<String>) -> Result<Project, SyncError> {
        let project = self.projects.add(name).await?;
        self.follow_active_project().await?;
        Ok(project)
    }

    pub async fn rename_project(
        &self,
        id: DbId,
        name: impl Into<String>,
    ) -> Result<Project, ApiError> {
        self.projects.rename(id, name).await
    }

    pub async fn delete_project(&self, id: DbId) -> Result<(), SyncError> {
        self.projects.delete(id).await?;
        self.follow_active_project().await
    }

    pub async fn move_task(&self, drop: &DropEvent) -> Result<MoveOutcome, SyncError> {
        self.board.move_task(drop).await
    }

    pub async fn create_task(&self, draft: TaskDraft) -> Result<Task, SyncError> {
        let task = self.board.create_task(draft).await?;
        self.projects.adjust_task_count(task.project_id, 1).await;
        Ok(task)
    }

    pub async fn edit_task(&self, task_id: DbId, draft: TaskDraft) -> Result<Task, SyncError> {
        self.board.edit_task(task_id, draft).await
    }

    pub async fn delete_task(&self, task_id: DbId) -> Result<(), SyncError> {
        // The owning project, not whichever one is active once the request
        // returns.
        let project_id = self
            .board
            .snapshot()
            .await
            .task(task_id)
            .map(|task| task.project_id);
        self.board.delete_task(task_id).await?;
        if let Some(project_id) = project_id {
            self.projects.adjust_task_count(project_id, -1).await;
        }
        Ok(())
    }

    /// Reload the board when the project list's selection moved away from it.
    async fn follow_active_project(&self) -> Result<(), SyncError> {
        let active = self.projects.active_id().await;
        if active != self.board.project_id().await {
            self.board.load(active).await?;
        }
        Ok(())
    }
}

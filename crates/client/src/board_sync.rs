//! Board state kept in sync with the server.
//!
//! Moves are optimistic: the board changes first, the status update is sent
//! afterwards, and a rejected update replaces the whole board with a fresh
//! server load. Create, edit and delete wait for the server before touching
//! the board.
//!
//! State sits behind a `RwLock` and every method takes `&self`, so several
//! operations may be in flight at once. The lock is only held for the
//! synchronous board edit, never across a request.

use std::sync::Arc;

use kanban_core::task::{Priority, TaskStatus};
use kanban_core::types::DbId;
use kanban_db::models::task::{CreateTask, Task, UpdateTask};
use tokio::sync::RwLock;

use crate::api::ApiError;
use crate::board::{Board, DropEvent};
use crate::gateway::TaskGateway;
use crate::notice::{self, Notice, NoticeSender};

/// Errors returned by board operations. Each one has already been reported
/// as an error [`Notice`] by the time the caller sees it.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("no project is selected")]
    NoActiveProject,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result of [`BoardSync::move_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The drop did not change the board; nothing was sent.
    Unchanged,
    /// The task was moved and the server accepted the new status.
    Moved(Task),
}

/// User-editable task fields, as entered in the create and edit forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub priority: Option<Priority>,
}

impl TaskDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

#[derive(Debug, Default)]
struct BoardState {
    project_id: Option<DbId>,
    board: Board,
    /// Bumped by every load; a load whose generation is stale when its
    /// response arrives is discarded.
    load_generation: u64,
}

/// The board of the active project.
pub struct BoardSync<G> {
    gateway: Arc<G>,
    state: RwLock<BoardState>,
    notices: NoticeSender,
}

impl<G: TaskGateway> BoardSync<G> {
    pub fn new(gateway: Arc<G>, notices: NoticeSender) -> Self {
        Self {
            gateway,
            state: RwLock::new(BoardState::default()),
            notices,
        }
    }

    /// A copy of the current board.
    pub async fn snapshot(&self) -> Board {
        self.state.read().await.board.clone()
    }

    pub async fn project_id(&self) -> Option<DbId> {
        self.state.read().await.project_id
    }

    /// Make `project_id` the active project and load its tasks.
    ///
    /// `None` clears the board without a request. On failure the board is
    /// left as it was.
    pub async fn load(&self, project_id: Option<DbId>) -> Result<(), SyncError> {
        let generation = {
            let mut state = self.state.write().await;
            state.project_id = project_id;
            state.load_generation += 1;
            if project_id.is_none() {
                state.board = Board::default();
            }
            state.load_generation
        };

        let Some(project_id) = project_id else {
            return Ok(());
        };

        match self.gateway.list_tasks_by_project(project_id).await {
            Ok(tasks) => {
                let mut state = self.state.write().await;
                if state.load_generation != generation {
                    tracing::debug!(project_id, "Discarding stale board load");
                    return Ok(());
                }
                state.board = Board::from_tasks(tasks);
                tracing::debug!(project_id, tasks = state.board.len(), "Board loaded");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(project_id, error = %err, "Failed to load tasks");
                self.notify(Notice::error("Could not load the tasks."));
                Err(err.into())
            }
        }
    }

    /// Load the active project again.
    pub async fn reload(&self) -> Result<(), SyncError> {
        let project_id = self.project_id().await;
        self.load(project_id).await
    }

    /// Apply a drag-and-drop move and persist the new status.
    ///
    /// The board changes before the request is sent. If the server rejects
    /// the update the board is reloaded from the server.
    pub async fn move_task(&self, drop: &DropEvent) -> Result<MoveOutcome, SyncError> {
        let moved = self.state.write().await.board.apply_drop(drop);
        let Some(task) = moved else {
            return Ok(MoveOutcome::Unchanged);
        };

        let status = TaskStatus::effective(task.status);
        match self
            .gateway
            .update_task(task.id, &UpdateTask::status_only(status))
            .await
        {
            Ok(_) => Ok(MoveOutcome::Moved(task)),
            Err(err) => {
                tracing::warn!(task_id = task.id, %status, error = %err, "Failed to move task");
                // The reload reports its own failure.
                let _ = self.reload().await;
                self.notify(Notice::error("Could not move the task."));
                Err(err.into())
            }
        }
    }

    /// Create a task in the active project, in the first column.
    pub async fn create_task(&self, draft: TaskDraft) -> Result<Task, SyncError> {
        let Some(project_id) = self.project_id().await else {
            self.notify(Notice::error("Select a project first."));
            return Err(SyncError::NoActiveProject);
        };

        let input = CreateTask {
            name: draft.name,
            description: draft.description,
            project_id,
            priority: draft.priority,
            status: Some(TaskStatus::Todo),
        };

        match self.gateway.create_task(&input).await {
            Ok(task) => {
                {
                    let mut state = self.state.write().await;
                    if state.project_id == Some(task.project_id) {
                        state.board.append(TaskStatus::Todo, task.clone());
                    }
                }
                tracing::debug!(task_id = task.id, project_id, "Task created");
                self.notify(Notice::success(
                    "Task added",
                    format!("Task \"{}\" was created.", task.name),
                ));
                Ok(task)
            }
            Err(err) => {
                tracing::warn!(project_id, error = %err, "Failed to create task");
                self.notify(Notice::error("Could not create the task."));
                Err(err.into())
            }
        }
    }

    /// Save edited fields of a task. Its status is left unchanged.
    pub async fn edit_task(&self, task_id: DbId, draft: TaskDraft) -> Result<Task, SyncError> {
        let input = UpdateTask {
            name: Some(draft.name),
            description: Some(draft.description),
            priority: draft.priority,
            status: None,
        };

        match self.gateway.update_task(task_id, &input).await {
            Ok(task) => {
                self.state.write().await.board.replace(task.clone());
                self.notify(Notice::success(
                    "Task updated",
                    format!("Task \"{}\" was saved.", task.name),
                ));
                Ok(task)
            }
            Err(err) => {
                tracing::warn!(task_id, error = %err, "Failed to update task");
                self.notify(Notice::error("Could not update the task."));
                Err(err.into())
            }
        }
    }

    /// Delete a task and drop it from the board.
    pub async fn delete_task(&self, task_id: DbId) -> Result<(), SyncError> {
        match self.gateway.delete_task(task_id).await {
            Ok(()) => {
                self.state.write().await.board.remove(task_id);
                self.notify(Notice::success("Task deleted", "The task was removed."));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(task_id, error = %err, "Failed to delete task");
                self.notify(Notice::error("Could not delete the task."));
                Err(err.into())
            }
        }
    }

    fn notify(&self, notice: Notice) {
        notice::emit(&self.notices, notice);
    }
}

//! Task entity model and DTOs.
//!
//! Tasks serialize with camelCase keys (`projectId`) to match the wire format
//! the board client expects.

use kanban_core::task::{Priority, TaskStatus};
use kanban_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub project_id: DbId,
}

impl Task {
    /// The status this task is displayed under (missing status is to-do).
    pub fn effective_status(&self) -> TaskStatus {
        TaskStatus::effective(self.status)
    }
}

/// DTO for creating a new task.
///
/// `priority` and `status` may be omitted; they are stored as null.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: String,
    pub project_id: DbId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

/// DTO for a partial task update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl UpdateTask {
    /// An update that only changes the status.
    pub fn status_only(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

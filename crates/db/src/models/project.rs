//! Project entity model and DTOs.

use kanban_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::task::Task;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
}

/// A project together with every task it owns.
///
/// Returned by the list and get-by-id endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectWithTasks {
    #[serde(flatten)]
    pub project: Project,
    pub tasks: Vec<Task>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// DTO for updating an existing project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
}

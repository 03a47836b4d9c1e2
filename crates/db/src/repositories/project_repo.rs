//! Repository for the `projects` table.

use std::collections::HashMap;

use kanban_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectWithTasks, UpdateProject};
use crate::models::task::Task;
use crate::repositories::TaskRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!("INSERT INTO projects (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by ID together with its tasks.
    pub async fn find_with_tasks(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithTasks>, sqlx::Error> {
        let Some(project) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let tasks = TaskRepo::list_by_project(pool, id).await?;
        Ok(Some(ProjectWithTasks { project, tasks }))
    }

    /// List all projects in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List all projects with their tasks nested.
    ///
    /// Runs two queries (projects, then all tasks) and groups in memory.
    pub async fn list_with_tasks(pool: &PgPool) -> Result<Vec<ProjectWithTasks>, sqlx::Error> {
        let projects = Self::list(pool).await?;
        let tasks = TaskRepo::list(pool).await?;

        let mut by_project: HashMap<DbId, Vec<Task>> = HashMap::new();
        for task in tasks {
            by_project.entry(task.project_id).or_default().push(task);
        }

        Ok(projects
            .into_iter()
            .map(|project| {
                let tasks = by_project.remove(&project.id).unwrap_or_default();
                ProjectWithTasks { project, tasks }
            })
            .collect())
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET name = COALESCE($2, name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project and, through the foreign key, all of its tasks.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

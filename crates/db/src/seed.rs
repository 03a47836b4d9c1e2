//! Demo data for local development.

use kanban_core::task::{Priority, TaskStatus};

use crate::DbPool;

/// (project name, [(task name, description, priority)])
const DEMO_PROJECTS: &[(&str, &[(&str, &str, Priority)])] = &[
    (
        "Project Alpha",
        &[
            ("Setup database", "Set up the PostgreSQL database", Priority::High),
            ("Create API endpoints", "Develop RESTful API endpoints", Priority::Medium),
        ],
    ),
    (
        "Project Beta",
        &[
            ("Design UI", "Create a user-friendly interface", Priority::High),
            ("Implement authentication", "Set up user login and registration", Priority::Medium),
        ],
    ),
];

/// Insert the demo projects and their tasks when no project exists yet.
///
/// Returns the number of projects inserted (zero when data was already
/// present).
pub async fn seed_demo_data(pool: &DbPool) -> Result<usize, sqlx::Error> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::debug!(existing, "Projects already present, skipping demo seed");
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    for &(project_name, tasks) in DEMO_PROJECTS {
        let (project_id,): (i64,) =
            sqlx::query_as("INSERT INTO projects (name) VALUES ($1) RETURNING id")
                .bind(project_name)
                .fetch_one(&mut *tx)
                .await?;

        for &(name, description, priority) in tasks {
            sqlx::query(
                "INSERT INTO tasks (name, description, priority, status, project_id)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(name)
            .bind(description)
            .bind(priority)
            .bind(TaskStatus::Todo)
            .bind(project_id)
            .execute(&mut *tx)
            .await?;
        }
    }
    tx.commit().await?;

    tracing::info!(projects = DEMO_PROJECTS.len(), "Seeded demo data");
    Ok(DEMO_PROJECTS.len())
}

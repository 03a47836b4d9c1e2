//! Integration tests for project and task repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create and fetch with nested tasks
//! - Partial updates
//! - Cascade delete behaviour
//! - Foreign key violations

use kanban_core::task::{Priority, TaskStatus};
use kanban_db::models::project::{CreateProject, UpdateProject};
use kanban_db::models::task::{CreateTask, UpdateTask};
use kanban_db::repositories::{ProjectRepo, TaskRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
    }
}

fn new_task(project_id: i64, name: &str) -> CreateTask {
    CreateTask {
        name: name.to_string(),
        description: format!("{name} description"),
        project_id,
        priority: None,
        status: None,
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_then_find_with_empty_tasks(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Alpha")).await.unwrap();
    assert_eq!(project.name, "Alpha");

    let found = ProjectRepo::find_with_tasks(&pool, project.id)
        .await
        .unwrap()
        .expect("project should exist");
    assert_eq!(found.project, project);
    assert!(found.tasks.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_project_returns_none(pool: PgPool) {
    let found = ProjectRepo::find_with_tasks(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_with_tasks_groups_by_project(pool: PgPool) {
    let a = ProjectRepo::create(&pool, &new_project("A")).await.unwrap();
    let b = ProjectRepo::create(&pool, &new_project("B")).await.unwrap();
    TaskRepo::create(&pool, &new_task(a.id, "a1")).await.unwrap();
    TaskRepo::create(&pool, &new_task(b.id, "b1")).await.unwrap();
    TaskRepo::create(&pool, &new_task(a.id, "a2")).await.unwrap();

    let projects = ProjectRepo::list_with_tasks(&pool).await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].project.id, a.id);
    let a_names: Vec<_> = projects[0].tasks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(a_names, ["a1", "a2"]);
    assert_eq!(projects[1].tasks.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_project_name(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Old")).await.unwrap();
    let updated = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            name: Some("New".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.id, project.id);
    assert_eq!(updated.name, "New");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_project_returns_none(pool: PgPool) {
    let updated = ProjectRepo::update(&pool, 424_242, &UpdateProject::default())
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_project_name_violates_check(pool: PgPool) {
    let result = ProjectRepo::create(&pool, &new_project("   ")).await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_project_cascades_to_tasks(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Doomed")).await.unwrap();
    for i in 0..3 {
        TaskRepo::create(&pool, &new_task(project.id, &format!("t{i}")))
            .await
            .unwrap();
    }

    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap());
    assert!(!ProjectRepo::delete(&pool, project.id).await.unwrap());

    let remaining = TaskRepo::list_by_project(&pool, project.id).await.unwrap();
    assert!(remaining.is_empty());
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_defaults_priority_and_status_to_null(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("P")).await.unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, "Write docs"))
        .await
        .unwrap();

    assert_eq!(task.project_id, project.id);
    assert_eq!(task.priority, None);
    assert_eq!(task.status, None);
    assert_eq!(task.effective_status(), TaskStatus::Todo);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_task_with_unknown_project_fails(pool: PgPool) {
    let result = TaskRepo::create(&pool, &new_task(777, "Orphan")).await;
    match result {
        Err(sqlx::Error::Database(db_err)) => {
            assert_eq!(db_err.code().as_deref(), Some("23503"));
        }
        other => panic!("expected foreign key violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_only_update_leaves_other_fields(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("P")).await.unwrap();
    let mut input = new_task(project.id, "Ship");
    input.priority = Some(Priority::High);
    input.status = Some(TaskStatus::Todo);
    let task = TaskRepo::create(&pool, &input).await.unwrap();

    let updated = TaskRepo::update(&pool, task.id, &UpdateTask::status_only(TaskStatus::Done))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, Some(TaskStatus::Done));
    assert_eq!(updated.name, task.name);
    assert_eq!(updated.description, task.description);
    assert_eq!(updated.priority, Some(Priority::High));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_project_filters(pool: PgPool) {
    let a = ProjectRepo::create(&pool, &new_project("A")).await.unwrap();
    let b = ProjectRepo::create(&pool, &new_project("B")).await.unwrap();
    TaskRepo::create(&pool, &new_task(a.id, "a1")).await.unwrap();
    TaskRepo::create(&pool, &new_task(b.id, "b1")).await.unwrap();

    let tasks = TaskRepo::list_by_project(&pool, b.id).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].name, "b1");

    let all = TaskRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_task(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("P")).await.unwrap();
    let task = TaskRepo::create(&pool, &new_task(project.id, "Gone"))
        .await
        .unwrap();

    assert!(TaskRepo::delete(&pool, task.id).await.unwrap());
    assert!(TaskRepo::find_by_id(&pool, task.id).await.unwrap().is_none());
    assert!(!TaskRepo::delete(&pool, task.id).await.unwrap());
}

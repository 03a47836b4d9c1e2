//! In-memory gateway for exercising the sync types without a server.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kanban_client::notice::NoticeReceiver;
use kanban_client::{ApiError, Notice, ProjectGateway, TaskGateway};
use kanban_core::task::{Priority, TaskStatus};
use kanban_core::types::DbId;
use kanban_db::models::project::{CreateProject, Project, ProjectWithTasks, UpdateProject};
use kanban_db::models::task::{CreateTask, Task, UpdateTask};
use tokio::sync::Notify;

/// Operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    ListProjects,
    CreateProject,
    UpdateProject,
    DeleteProject,
    ListTasks,
    CreateTask,
    UpdateTask,
    DeleteTask,
}

#[derive(Default)]
struct Store {
    projects: Vec<Project>,
    tasks: Vec<Task>,
    next_id: DbId,
}

#[derive(Default)]
pub struct FakeGateway {
    store: Mutex<Store>,
    failing: Mutex<HashSet<Op>>,
    calls: Mutex<Vec<Op>>,
    updates: Mutex<Vec<(DbId, UpdateTask)>>,
    held_loads: Mutex<HashMap<DbId, Arc<Notify>>>,
}

impl FakeGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_project(&self, name: &str) -> DbId {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        store.projects.push(Project {
            id,
            name: name.to_string(),
        });
        id
    }

    pub fn add_task(&self, project_id: DbId, name: &str, status: Option<TaskStatus>) -> DbId {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        store.tasks.push(Task {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            priority: Some(Priority::Medium),
            status,
            project_id,
        });
        id
    }

    pub fn stored_task(&self, id: DbId) -> Option<Task> {
        self.store
            .lock()
            .unwrap()
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    /// Change a stored status without going through the gateway, as another
    /// client would.
    pub fn set_status(&self, id: DbId, status: Option<TaskStatus>) {
        let mut store = self.store.lock().unwrap();
        if let Some(task) = store.tasks.iter_mut().find(|t| t.id == id) {
            task.status = status;
        }
    }

    pub fn fail(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: Op) {
        self.failing.lock().unwrap().remove(&op);
    }

    pub fn calls(&self, op: Op) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == op).count()
    }

    /// Every task update request received, in order.
    pub fn updates(&self) -> Vec<(DbId, UpdateTask)> {
        self.updates.lock().unwrap().clone()
    }

    /// Block task loads for `project_id` until the returned handle is
    /// notified.
    pub fn hold_loads(&self, project_id: DbId) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.held_loads
            .lock()
            .unwrap()
            .insert(project_id, Arc::clone(&gate));
        gate
    }

    fn enter(&self, op: Op) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(op);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(ApiError::Status {
                status: 500,
                body: r#"{"error":"An internal error occurred","code":"INTERNAL_ERROR"}"#
                    .to_string(),
            });
        }
        Ok(())
    }

    fn not_found(entity: &str, id: DbId) -> ApiError {
        ApiError::Status {
            status: 404,
            body: format!(r#"{{"error":"{entity} with id {id} not found","code":"NOT_FOUND"}}"#),
        }
    }
}

#[async_trait]
impl TaskGateway for FakeGateway {
    async fn list_tasks_by_project(&self, project_id: DbId) -> Result<Vec<Task>, ApiError> {
        let gate = self.held_loads.lock().unwrap().get(&project_id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.enter(Op::ListTasks)?;
        let store = self.store.lock().unwrap();
        Ok(store
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn create_task(&self, input: &CreateTask) -> Result<Task, ApiError> {
        self.enter(Op::CreateTask)?;
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let task = Task {
            id: store.next_id,
            name: input.name.clone(),
            description: input.description.clone(),
            priority: input.priority,
            status: input.status,
            project_id: input.project_id,
        };
        store.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: DbId, input: &UpdateTask) -> Result<Task, ApiError> {
        self.enter(Op::UpdateTask)?;
        self.updates.lock().unwrap().push((id, input.clone()));
        let mut store = self.store.lock().unwrap();
        let task = store
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Self::not_found("Task", id))?;
        if let Some(name) = &input.name {
            task.name = name.clone();
        }
        if let Some(description) = &input.description {
            task.description = description.clone();
        }
        if input.priority.is_some() {
            task.priority = input.priority;
        }
        if input.status.is_some() {
            task.status = input.status;
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, id: DbId) -> Result<(), ApiError> {
        self.enter(Op::DeleteTask)?;
        let mut store = self.store.lock().unwrap();
        let before = store.tasks.len();
        store.tasks.retain(|t| t.id != id);
        if store.tasks.len() == before {
            return Err(Self::not_found("Task", id));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectGateway for FakeGateway {
    async fn list_projects(&self) -> Result<Vec<ProjectWithTasks>, ApiError> {
        self.enter(Op::ListProjects)?;
        let store = self.store.lock().unwrap();
        Ok(store
            .projects
            .iter()
            .map(|p| ProjectWithTasks {
                project: p.clone(),
                tasks: store
                    .tasks
                    .iter()
                    .filter(|t| t.project_id == p.id)
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    async fn create_project(&self, input: &CreateProject) -> Result<Project, ApiError> {
        self.enter(Op::CreateProject)?;
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let project = Project {
            id: store.next_id,
            name: input.name.clone(),
        };
        store.projects.push(project.clone());
        Ok(project)
    }

    async fn update_project(&self, id: DbId, input: &UpdateProject) -> Result<Project, ApiError> {
        self.enter(Op::UpdateProject)?;
        let mut store = self.store.lock().unwrap();
        let project = store
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Self::not_found("Project", id))?;
        if let Some(name) = &input.name {
            project.name = name.clone();
        }
        Ok(project.clone())
    }

    async fn delete_project(&self, id: DbId) -> Result<(), ApiError> {
        self.enter(Op::DeleteProject)?;
        let mut store = self.store.lock().unwrap();
        let before = store.projects.len();
        store.projects.retain(|p| p.id != id);
        if store.projects.len() == before {
            return Err(Self::not_found("Project", id));
        }
        store.tasks.retain(|t| t.project_id != id);
        Ok(())
    }
}

/// Drain every notice emitted so far.
pub fn drain(rx: &mut NoticeReceiver) -> Vec<Notice> {
    let mut notices = Vec::new();
    while let Ok(notice) = rx.try_recv() {
        notices.push(notice);
    }
    notices
}

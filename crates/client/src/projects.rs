//! Project list with per-project task counts and the active selection.

use std::sync::Arc;

use kanban_core::types::DbId;
use kanban_db::models::project::{CreateProject, Project, UpdateProject};
use tokio::sync::RwLock;

use crate::api::ApiError;
use crate::gateway::ProjectGateway;
use crate::notice::{self, Notice, NoticeSender};

/// One row of the project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub project: Project,
    pub task_count: usize,
}

/// Local project list. Pure state; [`ProjectsSync`] drives it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectList {
    entries: Vec<ProjectEntry>,
    active: Option<DbId>,
}

impl ProjectList {
    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn active_id(&self) -> Option<DbId> {
        self.active
    }

    pub fn active(&self) -> Option<&ProjectEntry> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: DbId) -> Option<&ProjectEntry> {
        self.entries.iter().find(|e| e.project.id == id)
    }

    /// Replace every entry. Keeps the active project when it still exists,
    /// otherwise selects the first one.
    pub fn replace_all(&mut self, entries: Vec<ProjectEntry>) {
        self.entries = entries;
        if !self.active.is_some_and(|id| self.get(id).is_some()) {
            self.active = self.first_id();
        }
    }

    /// Append a new project with no tasks. It becomes active when the list
    /// was empty.
    pub fn push(&mut self, project: Project) {
        if self.entries.is_empty() {
            self.active = Some(project.id);
        }
        self.entries.push(ProjectEntry {
            project,
            task_count: 0,
        });
    }

    /// Swap in a renamed project, keeping its task count.
    pub fn rename(&mut self, project: Project) -> bool {
        match self.entries.iter_mut().find(|e| e.project.id == project.id) {
            Some(entry) => {
                entry.project = project;
                true
            }
            None => false,
        }
    }

    /// Remove a project. When it was active, the first remaining project (or
    /// none) becomes active.
    pub fn remove(&mut self, id: DbId) -> Option<ProjectEntry> {
        let index = self.entries.iter().position(|e| e.project.id == id)?;
        let removed = self.entries.remove(index);
        if self.active == Some(id) {
            self.active = self.first_id();
        }
        Some(removed)
    }

    /// Select a project. Unknown ids are ignored.
    pub fn select(&mut self, id: DbId) -> bool {
        if self.get(id).is_some() {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    /// Shift a project's task count, saturating at zero.
    pub fn adjust_task_count(&mut self, id: DbId, delta: isize) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.project.id == id) {
            entry.task_count = entry.task_count.saturating_add_signed(delta);
        }
    }

    fn first_id(&self) -> Option<DbId> {
        self.entries.first().map(|e| e.project.id)
    }
}

/// The project list kept in sync with the server.
pub struct ProjectsSync<G> {
    gateway: Arc<G>,
    state: RwLock<ProjectList>,
    notices: NoticeSender,
}

impl<G: ProjectGateway> ProjectsSync<G> {
    pub fn new(gateway: Arc<G>, notices: NoticeSender) -> Self {
        Self {
            gateway,
            state: RwLock::new(ProjectList::default()),
            notices,
        }
    }

    pub async fn snapshot(&self) -> ProjectList {
        self.state.read().await.clone()
    }

    pub async fn active_id(&self) -> Option<DbId> {
        self.state.read().await.active_id()
    }

    /// Fetch every project and count its tasks.
    pub async fn load(&self) -> Result<(), ApiError> {
        match self.gateway.list_projects().await {
            Ok(projects) => {
                let entries = projects
                    .into_iter()
                    .map(|p| ProjectEntry {
                        task_count: p.tasks.len(),
                        project: p.project,
                    })
                    .collect();
                self.state.write().await.replace_all(entries);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load projects");
                self.notify(Notice::error("Could not load the projects."));
                Err(err)
            }
        }
    }

    pub async fn select(&self, id: DbId) -> bool {
        self.state.write().await.select(id)
    }

    pub async fn add(&self, name: impl Into<String>) -> Result<Project, ApiError> {
        let input = CreateProject { name: name.into() };
        match self.gateway.create_project(&input).await {
            Ok(project) => {
                self.state.write().await.push(project.clone());
                tracing::debug!(project_id = project.id, "Project created");
                self.notify(Notice::success(
                    "Project added",
                    format!("Project \"{}\" was created.", project.name),
                ));
                Ok(project)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to create project");
                self.notify(Notice::error("Could not create the project."));
                Err(err)
            }
        }
    }

    pub async fn rename(&self, id: DbId, name: impl Into<String>) -> Result<Project, ApiError> {
        let input = UpdateProject {
            name: Some(name.into()),
        };
        match self.gateway.update_project(id, &input).await {
            Ok(project) => {
                self.state.write().await.rename(project.clone());
                self.notify(Notice::success(
                    "Project updated",
                    format!("Project \"{}\" was saved.", project.name),
                ));
                Ok(project)
            }
            Err(err) => {
                tracing::warn!(project_id = id, error = %err, "Failed to update project");
                self.notify(Notice::error("Could not update the project."));
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: DbId) -> Result<(), ApiError> {
        match self.gateway.delete_project(id).await {
            Ok(()) => {
                self.state.write().await.remove(id);
                self.notify(Notice::success("Project deleted", "The project was removed."));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(project_id = id, error = %err, "Failed to delete project");
                self.notify(Notice::error("Could not delete the project."));
                Err(err)
            }
        }
    }

    /// Shift the task count of one project, saturating at zero.
    pub async fn adjust_task_count(&self, id: DbId, delta: isize) {
        self.state.write().await.adjust_task_count(id, delta);
    }

    fn notify(&self, notice: Notice) {
        notice::emit(&self.notices, notice);
    }
}

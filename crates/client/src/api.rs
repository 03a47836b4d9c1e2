//! REST API client for the kanban HTTP endpoints.
//!
//! Wraps every `/project`, `/task` and `/health` operation using
//! [`reqwest`]. One method issues exactly one request; there is no retry,
//! caching or batching. Errors are returned unchanged to the caller.

use kanban_core::types::DbId;
use kanban_db::models::project::{CreateProject, Project, ProjectWithTasks, UpdateProject};
use kanban_db::models::task::{CreateTask, Task, UpdateTask};
use serde::Deserialize;

use crate::config::ClientConfig;

/// HTTP client for one kanban API server.
#[derive(Debug, Clone)]
pub struct KanbanApi {
    client: reqwest::Client,
    api_url: String,
}

/// Body returned by the delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Body returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub database: String,
}

/// Errors from the kanban REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Kanban API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl KanbanApi {
    /// Create a new API client.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:3000`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = ClientConfig::new(api_url).api_url;
        Self { client, api_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    // ---- projects ----

    /// `GET /project` -- every project with its tasks.
    pub async fn list_projects(&self) -> Result<Vec<ProjectWithTasks>, ApiError> {
        let response = self.client.get(self.url("/project")).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /project/{id}` -- `None` when the project does not exist.
    pub async fn get_project(&self, id: DbId) -> Result<Option<ProjectWithTasks>, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/project/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /project`
    pub async fn create_project(&self, input: &CreateProject) -> Result<Project, ApiError> {
        let response = self
            .client
            .post(self.url("/project"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PATCH /project/{id}`
    pub async fn update_project(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Project, ApiError> {
        let response = self
            .client
            .patch(self.url(&format!("/project/{id}")))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /project/{id}` -- also removes the project's tasks.
    pub async fn delete_project(&self, id: DbId) -> Result<DeleteResponse, ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/project/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- tasks ----

    /// `GET /task` -- every task of every project.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = self.client.get(self.url("/task")).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /task/{project_id}`
    pub async fn list_tasks_by_project(&self, project_id: DbId) -> Result<Vec<Task>, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/task/{project_id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /task`
    pub async fn create_task(&self, input: &CreateTask) -> Result<Task, ApiError> {
        let response = self
            .client
            .post(self.url("/task"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PATCH /task/{id}` -- only the fields set in `input` are sent.
    pub async fn update_task(&self, id: DbId, input: &UpdateTask) -> Result<Task, ApiError> {
        let response = self
            .client
            .patch(self.url(&format!("/task/{id}")))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /task/{id}`
    pub async fn delete_task(&self, id: DbId) -> Result<DeleteResponse, ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/task/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- health ----

    /// `GET /health`. A disconnected database surfaces as a 500 status error.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self.client.get(self.url("/health")).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ApiError::Status`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

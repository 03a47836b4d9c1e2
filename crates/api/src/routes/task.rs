//! Route definitions for the `/task` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/task`.
///
/// The single path parameter means a project id on `GET` and a task id on
/// `PATCH` / `DELETE`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> list_by_project
/// PATCH  /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route(
            "/{id}",
            get(task::list_by_project)
                .patch(task::update)
                .delete(task::delete),
        )
}

pub mod health;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /project                                         list, create
/// /project/{id}                                    get (with tasks), update, delete
///
/// /task                                            list, create
/// /task/{id}                                       list by project (GET), update, delete
/// ```
///
/// `/health` is mounted separately by the app router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/project", project::router())
        .nest("/task", task::router())
}

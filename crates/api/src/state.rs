/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created once at startup.
    pub pool: kanban_db::DbPool,
}

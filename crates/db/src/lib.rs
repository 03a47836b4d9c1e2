//! Persistence layer: pool lifecycle, entity models, and repositories.
//!
//! The pool is created once by the caller and passed explicitly to every
//! repository call; nothing in this crate holds global state.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::PgPool;

/// Bookkeeping table maintained by the sqlx migrator.
const MIGRATIONS_TABLE: &str = "_sqlx_migrations";

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database answers.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Close every connection in the pool and wait for them to be released.
pub async fn close_pool(pool: &DbPool) {
    pool.close().await;
    tracing::info!("Database pool closed");
}

/// Empty every application table and restart its identity sequence.
///
/// The migrations table is left alone so the schema stays applied.
pub async fn reset_database(pool: &DbPool) -> Result<(), sqlx::Error> {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT tablename::text FROM pg_tables
         WHERE schemaname = 'public' AND tablename <> $1",
    )
    .bind(MIGRATIONS_TABLE)
    .fetch_all(pool)
    .await?;

    if tables.is_empty() {
        return Ok(());
    }

    let list = tables
        .iter()
        .map(|(name,)| format!("\"public\".\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ");

    sqlx::query(&format!("TRUNCATE TABLE {list} RESTART IDENTITY CASCADE"))
        .execute(pool)
        .await?;

    tracing::debug!(table_count = tables.len(), "Database reset");
    Ok(())
}

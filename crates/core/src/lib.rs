//! Shared domain types for the kanban workspace.
//!
//! Holds the primitive id type, the domain error, and the task enumerations
//! used by the database, the HTTP API, and the client alike.

pub mod error;
pub mod task;
pub mod types;

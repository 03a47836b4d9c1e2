//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches
//!
//! DTOs derive both `Serialize` and `Deserialize` so the HTTP client can
//! send exactly what the server accepts.

pub mod project;
pub mod task;

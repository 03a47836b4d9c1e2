//! Repository layer: one zero-sized struct per table with async CRUD methods.
//!
//! Every method takes the pool explicitly and performs a single SQL
//! statement unless noted otherwise.

pub mod project_repo;
pub mod task_repo;

pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;

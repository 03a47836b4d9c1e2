//! Typed HTTP client and board synchronization for the kanban API.
//!
//! [`api::KanbanApi`] maps each REST operation to one request. The sync
//! types ([`board_sync::BoardSync`], [`projects::ProjectsSync`],
//! [`session::KanbanSession`]) keep a local model of the board, apply
//! optimistic edits, and fall back to server state when a request fails.

pub mod api;
pub mod board;
pub mod board_sync;
pub mod config;
pub mod gateway;
pub mod notice;
pub mod projects;
pub mod session;

pub use api::{ApiError, KanbanApi};
pub use board::{Board, Column, DropEvent, DropLocation};
pub use board_sync::{BoardSync, MoveOutcome, SyncError, TaskDraft};
pub use config::ClientConfig;
pub use gateway::{ProjectGateway, TaskGateway};
pub use notice::{Notice, NoticeLevel};
pub use projects::{ProjectEntry, ProjectList, ProjectsSync};
pub use session::KanbanSession;

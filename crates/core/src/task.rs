//! Task priority and status enumerations.
//!
//! Both map to PostgreSQL enum types (`priority`, `task_status`) and use the
//! same lowercase wire values in JSON and in the database.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Task priority. Stored as the `priority` enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "priority")]
pub enum Priority {
    #[serde(rename = "baixa")]
    #[sqlx(rename = "baixa")]
    Low,
    #[serde(rename = "media")]
    #[sqlx(rename = "media")]
    Medium,
    #[serde(rename = "alta")]
    #[sqlx(rename = "alta")]
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "baixa",
            Self::Medium => "media",
            Self::High => "alta",
        }
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Task workflow status. Stored as the `task_status` enum type.
///
/// The declaration order is the board column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status")]
pub enum TaskStatus {
    #[serde(rename = "a_fazer")]
    #[sqlx(rename = "a_fazer")]
    Todo,
    #[serde(rename = "em_progresso")]
    #[sqlx(rename = "em_progresso")]
    InProgress,
    #[serde(rename = "concluido")]
    #[sqlx(rename = "concluido")]
    Done,
}

impl TaskStatus {
    /// Every status, in column order.
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::InProgress, Self::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "a_fazer",
            Self::InProgress => "em_progresso",
            Self::Done => "concluido",
        }
    }

    /// Resolve a stored status to the one a task is displayed under.
    ///
    /// Tasks without a status belong to the first column. This is the only
    /// place that rule lives.
    pub fn effective(status: Option<TaskStatus>) -> TaskStatus {
        status.unwrap_or(Self::Todo)
    }

    /// Zero-based position of this status among the board columns.
    pub fn column_index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Local kanban board model.
//!
//! Three columns, one per [`TaskStatus`], each an ordered list of tasks.
//! Everything here is synchronous and side-effect free; network calls and
//! rollback live in [`crate::board_sync`].

use kanban_core::task::TaskStatus;
use kanban_core::types::DbId;
use kanban_db::models::task::Task;

/// One board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

impl Column {
    fn empty(status: TaskStatus) -> Self {
        Self {
            status,
            tasks: Vec::new(),
        }
    }

    /// Display title of the column.
    pub fn title(&self) -> &'static str {
        match self.status {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    fn position(&self, task_id: DbId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }
}

/// A position on the board: a column and an index inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropLocation {
    pub status: TaskStatus,
    pub index: usize,
}

impl DropLocation {
    pub fn new(status: TaskStatus, index: usize) -> Self {
        Self { status, index }
    }
}

/// The end of a drag gesture.
///
/// `destination` is `None` when the card was released outside any column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropEvent {
    pub task_id: DbId,
    pub source: DropLocation,
    pub destination: Option<DropLocation>,
}

/// The three-column board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: [Column; 3],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            columns: TaskStatus::ALL.map(Column::empty),
        }
    }
}

impl Board {
    /// Partition tasks into columns by their effective status, keeping the
    /// input order inside each column.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::default();
        for task in tasks {
            let index = task.effective_status().column_index();
            board.columns[index].tasks.push(task);
        }
        board
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, status: TaskStatus) -> &Column {
        &self.columns[status.column_index()]
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Column {
        &mut self.columns[status.column_index()]
    }

    /// Total number of tasks on the board.
    pub fn len(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Locate a task: its column and index.
    pub fn locate(&self, task_id: DbId) -> Option<DropLocation> {
        self.columns.iter().find_map(|column| {
            column
                .position(task_id)
                .map(|index| DropLocation::new(column.status, index))
        })
    }

    pub fn task(&self, task_id: DbId) -> Option<&Task> {
        self.locate(task_id)
            .map(|loc| &self.column(loc.status).tasks[loc.index])
    }

    /// Apply a drop to the board.
    ///
    /// Removes the task from the source column, gives it the destination
    /// status, and inserts it at the destination index (clamped to the column
    /// length). Returns the moved task, or `None` when the drop changes
    /// nothing: no destination, the same slot, or a task that is not in the
    /// source column.
    pub fn apply_drop(&mut self, drop: &DropEvent) -> Option<Task> {
        let destination = drop.destination?;
        if destination == drop.source {
            return None;
        }

        let source = self.column_mut(drop.source.status);
        let position = source.position(drop.task_id)?;
        let mut task = source.tasks.remove(position);
        task.status = Some(destination.status);

        let target = self.column_mut(destination.status);
        let index = destination.index.min(target.tasks.len());
        target.tasks.insert(index, task.clone());
        Some(task)
    }

    /// Append a task to the end of a column.
    pub fn append(&mut self, status: TaskStatus, task: Task) {
        self.column_mut(status).tasks.push(task);
    }

    /// Replace a task in place, wherever it is. Returns `false` if absent.
    ///
    /// The local status is kept, so the card stays in the column it is
    /// shown in even if `task` carries a different status (for example
    /// while a move of the same card is still in flight).
    pub fn replace(&mut self, mut task: Task) -> bool {
        match self.locate(task.id) {
            Some(loc) => {
                let slot = &mut self.column_mut(loc.status).tasks[loc.index];
                task.status = slot.status;
                *slot = task;
                true
            }
            None => false,
        }
    }

    /// Remove a task from whichever column holds it.
    pub fn remove(&mut self, task_id: DbId) -> Option<Task> {
        let loc = self.locate(task_id)?;
        Some(self.column_mut(loc.status).tasks.remove(loc.index))
    }

    /// Task ids of a column, in order.
    pub fn ids(&self, status: TaskStatus) -> Vec<DbId> {
        self.column(status).tasks.iter().map(|t| t.id).collect()
    }
}

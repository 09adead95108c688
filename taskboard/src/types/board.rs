//! Board-level types: Board, Column

use super::ids::TaskId;
use super::status::Status;
use super::task::Task;
use crate::error::{Result, TaskboardError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// A column is an ordered bucket of task ids for one workflow stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub(crate) id: Status,
    pub title: String,
    #[serde(default)]
    pub(crate) task_ids: Vec<TaskId>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: Status, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    /// Get the column's ID
    pub fn id(&self) -> Status {
        self.id
    }

    /// Task ids in display order
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Index of a task in this column
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|t| t == id)
    }

    /// Check if the column holds a task
    pub fn contains(&self, id: &TaskId) -> bool {
        self.task_ids.contains(id)
    }

    /// Number of tasks in the column
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    /// Check if the column is empty
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }
}

/// The full kanban state: tasks, columns and column order.
///
/// Tasks and columns sit behind `Arc`, so cloning a board copies pointers
/// and the reducers in [`crate::moves`] share every record they do not touch
/// with the board they started from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub(crate) tasks: IndexMap<TaskId, Arc<Task>>,
    pub(crate) columns: IndexMap<Status, Arc<Column>>,
    pub(crate) column_order: Vec<Status>,
}

impl Board {
    /// Create an empty board with the default columns
    pub fn new() -> Self {
        Self::with_columns(
            Status::ALL
                .into_iter()
                .map(|status| Column::new(status, status.default_title())),
        )
    }

    /// Create an empty board from columns, in display order.
    ///
    /// A column repeated later in the iterator replaces the earlier one.
    pub fn with_columns(columns: impl IntoIterator<Item = Column>) -> Self {
        let mut board = Self {
            tasks: IndexMap::new(),
            columns: IndexMap::new(),
            column_order: Vec::new(),
        };
        for mut column in columns {
            column.task_ids.clear();
            if !board.columns.contains_key(&column.id) {
                board.column_order.push(column.id);
            }
            board.columns.insert(column.id, Arc::new(column));
        }
        board
    }

    /// Look up a task
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id).map(Arc::as_ref)
    }

    /// Check if a task exists
    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.tasks.contains_key(id)
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values().map(Arc::as_ref)
    }

    /// Number of tasks on the board
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Look up a column
    pub fn column(&self, id: Status) -> Option<&Column> {
        self.columns.get(&id).map(Arc::as_ref)
    }

    /// Columns in display order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id).map(Arc::as_ref))
    }

    /// Column ids in display order
    pub fn column_order(&self) -> &[Status] {
        &self.column_order
    }

    /// Find the column currently holding a task
    pub fn column_of(&self, id: &TaskId) -> Option<Status> {
        self.columns().find(|c| c.contains(id)).map(Column::id)
    }

    /// Tasks of a column in display order
    pub fn column_tasks(&self, id: Status) -> Vec<&Task> {
        self.column(id)
            .map(|column| {
                column
                    .task_ids
                    .iter()
                    .filter_map(|task_id| self.task(task_id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check the board invariants.
    ///
    /// - every id listed by a column exists in `tasks`
    /// - every task is listed exactly once across all columns
    /// - each task's status is the id of the column listing it
    /// - `column_order` is a permutation of the column keys
    pub fn validate(&self) -> Result<()> {
        for (key, column) in &self.columns {
            if *key != column.id {
                return Err(TaskboardError::corrupt(format!(
                    "column stored under '{}' has id '{}'",
                    key, column.id
                )));
            }
        }

        let mut seen_columns = HashSet::new();
        for id in &self.column_order {
            if !seen_columns.insert(*id) {
                return Err(TaskboardError::corrupt(format!(
                    "column '{}' repeated in column order",
                    id
                )));
            }
            if !self.columns.contains_key(id) {
                return Err(TaskboardError::corrupt(format!(
                    "column order names unknown column '{}'",
                    id
                )));
            }
        }
        if seen_columns.len() != self.columns.len() {
            return Err(TaskboardError::corrupt(
                "column order omits some columns",
            ));
        }

        let mut owner: HashMap<&TaskId, Status> = HashMap::new();
        for column in self.columns.values() {
            for task_id in &column.task_ids {
                if owner.insert(task_id, column.id).is_some() {
                    return Err(TaskboardError::corrupt(format!(
                        "task '{}' listed more than once",
                        task_id
                    )));
                }
                if !self.tasks.contains_key(task_id) {
                    return Err(TaskboardError::corrupt(format!(
                        "column '{}' lists unknown task '{}'",
                        column.id, task_id
                    )));
                }
            }
        }

        for (key, task) in &self.tasks {
            if *key != task.id {
                return Err(TaskboardError::corrupt(format!(
                    "task stored under '{}' has id '{}'",
                    key, task.id
                )));
            }
            match owner.get(key) {
                None => {
                    return Err(TaskboardError::corrupt(format!(
                        "task '{}' is not in any column",
                        key
                    )))
                }
                Some(column) if *column != task.status => {
                    return Err(TaskboardError::corrupt(format!(
                        "task '{}' has status '{}' but sits in column '{}'",
                        key, task.status, column
                    )))
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    // =========================================================================
    // Crate-internal mutation, used by the reducers and commands
    // =========================================================================

    pub(crate) fn column_mut(&mut self, id: Status) -> Option<&mut Column> {
        self.columns.get_mut(&id).map(Arc::make_mut)
    }

    pub(crate) fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(id).map(Arc::make_mut)
    }

    /// Insert a task record and append it to the column matching its status.
    /// The caller checks that the column exists and the id is free.
    pub(crate) fn push_task(&mut self, task: Task) {
        let status = task.status;
        let id = task.id.clone();
        self.tasks.insert(id.clone(), Arc::new(task));
        if let Some(column) = self.column_mut(status) {
            column.task_ids.push(id);
        }
    }

    /// Remove a task record and its column entry.
    pub(crate) fn remove_task(&mut self, id: &TaskId) -> Option<Arc<Task>> {
        let removed = self.tasks.shift_remove(id)?;
        if let Some(column) = self.column_mut(removed.status) {
            column.task_ids.retain(|t| t != id);
        }
        Some(removed)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

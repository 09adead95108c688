//! GetTask command

use crate::error::{Result, TaskboardError};
use crate::operation::Execute;
use crate::store::BoardStore;
use crate::types::{Task, TaskId};

/// Get a task by ID
#[derive(Debug, Clone)]
pub struct GetTask {
    /// The task ID to retrieve
    pub id: TaskId,
}

impl GetTask {
    /// Create a new GetTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute for GetTask {
    type Output = Task;

    fn op(&self) -> &'static str {
        "get task"
    }

    fn execute(&self, store: &mut BoardStore) -> Result<Task> {
        store
            .board()
            .task(&self.id)
            .cloned()
            .ok_or_else(|| TaskboardError::TaskNotFound {
                id: self.id.to_string(),
            })
    }
}

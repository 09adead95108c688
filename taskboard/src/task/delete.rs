//! DeleteTask command

use crate::drag::DragSession;
use crate::error::{Result, TaskboardError};
use crate::operation::Execute;
use crate::store::BoardStore;
use crate::types::{Board, TaskId};
use tracing::debug;

/// Delete a task from the board and from its column
#[derive(Debug, Clone)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

impl DeleteTask {
    /// Create a new DeleteTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute for DeleteTask {
    type Output = Board;

    fn op(&self) -> &'static str {
        "delete task"
    }

    fn execute(&self, store: &mut BoardStore) -> Result<Board> {
        let mut next = store.board().clone();
        if next.remove_task(&self.id).is_none() {
            return Err(TaskboardError::TaskNotFound {
                id: self.id.to_string(),
            });
        }
        store.commit(next)?;

        if store.drag().active_task() == Some(&self.id) {
            store.set_drag(DragSession::Idle);
        }
        debug!(task = %self.id, "deleted task");
        Ok(store.board().clone())
    }
}

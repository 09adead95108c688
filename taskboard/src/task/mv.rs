//! MoveTask command

use crate::error::{Result, TaskboardError};
use crate::moves::transfer;
use crate::operation::Execute;
use crate::store::BoardStore;
use crate::types::{Board, Status, TaskId};

/// Move a task to a column, optionally at a given index.
///
/// Within the task's own column this is a reorder; without an index the task
/// goes to the end.
#[derive(Debug, Clone)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// Target column
    pub column: Status,
    /// Target index (None = at end)
    pub index: Option<usize>,
}

impl MoveTask {
    /// Create a MoveTask command to move to a column (at the end)
    pub fn to_column(id: impl Into<TaskId>, column: Status) -> Self {
        Self {
            id: id.into(),
            column,
            index: None,
        }
    }

    /// Create a MoveTask command with column and index
    pub fn to_position(id: impl Into<TaskId>, column: Status, index: usize) -> Self {
        Self {
            id: id.into(),
            column,
            index: Some(index),
        }
    }
}

impl Execute for MoveTask {
    type Output = Board;

    fn op(&self) -> &'static str {
        "move task"
    }

    fn execute(&self, store: &mut BoardStore) -> Result<Board> {
        let board = store.board();
        let source = board
            .column_of(&self.id)
            .ok_or_else(|| TaskboardError::TaskNotFound {
                id: self.id.to_string(),
            })?;
        if board.column(self.column).is_none() {
            return Err(TaskboardError::ColumnNotFound {
                id: self.column.to_string(),
            });
        }

        let next = transfer(board, &self.id, source, self.column, self.index);
        store.commit(next)?;
        Ok(store.board().clone())
    }
}

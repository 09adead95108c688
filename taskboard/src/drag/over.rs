//! DragOver command

use crate::drag::resolve_target;
use crate::error::Result;
use crate::moves::transfer;
use crate::operation::Execute;
use crate::store::BoardStore;
use crate::types::Board;
use tracing::debug;

/// Pointer moved over a column or task while dragging.
///
/// When the hovered column differs from the dragged task's column, the task
/// is transferred to the end of the hovered column and committed at once.
/// Repeating the event over the same target changes nothing.
#[derive(Debug, Clone)]
pub struct DragOver {
    /// Column id or task id under the pointer
    pub over: String,
}

impl DragOver {
    /// Create a new DragOver command
    pub fn new(over: impl Into<String>) -> Self {
        Self { over: over.into() }
    }
}

impl Execute for DragOver {
    type Output = Board;

    fn op(&self) -> &'static str {
        "drag over"
    }

    fn execute(&self, store: &mut BoardStore) -> Result<Board> {
        let Some(task) = store.drag().active_task().cloned() else {
            return Ok(store.board().clone());
        };

        let board = store.board();
        let (Some(source), Some(dest)) = (board.column_of(&task), resolve_target(board, &self.over))
        else {
            return Ok(board.clone());
        };
        if source == dest {
            return Ok(board.clone());
        }

        debug!(%task, %source, %dest, "drag moved task to another column");
        let next = transfer(board, &task, source, dest, None);
        store.commit(next)?;
        Ok(store.board().clone())
    }
}

//! DropTask command

use crate::drag::{restored, DragSession};
use crate::error::Result;
use crate::moves::reorder;
use crate::operation::Execute;
use crate::store::BoardStore;
use crate::types::{Board, TaskId};
use tracing::debug;

/// Release the dragged task: `dragging -> idle`.
///
/// Dropping onto another task in the same column reorders the column so the
/// dragged task takes that task's index. A cross-column drop needs nothing
/// more, since hovering already moved the task. Dropping with no target is
/// an abort.
#[derive(Debug, Clone, Default)]
pub struct DropTask {
    /// Column id or task id under the pointer, `None` outside any target
    pub over: Option<String>,
}

impl DropTask {
    /// Drop onto a column or task
    pub fn new(over: impl Into<String>) -> Self {
        Self {
            over: Some(over.into()),
        }
    }

    /// Drop outside any target
    pub fn outside() -> Self {
        Self { over: None }
    }
}

impl Execute for DropTask {
    type Output = Board;

    fn op(&self) -> &'static str {
        "drop task"
    }

    fn execute(&self, store: &mut BoardStore) -> Result<Board> {
        let DragSession::Dragging { task, origin } = store.take_drag() else {
            return Ok(store.board().clone());
        };

        let Some(over) = self.over.as_deref() else {
            debug!(%task, "dropped outside any target");
            if store.drag_config().restore_on_abort {
                if let Some(next) = restored(store.board(), &task, origin) {
                    store.commit(next)?;
                }
            }
            return Ok(store.board().clone());
        };

        let board = store.board();
        let over_task = TaskId::from(over);
        if over_task == task {
            return Ok(board.clone());
        }

        let Some(column) = board.column_of(&task).and_then(|id| board.column(id)) else {
            return Ok(board.clone());
        };
        if let (Some(from), Some(to)) = (column.position(&task), column.position(&over_task)) {
            debug!(%task, column = %column.id(), from, to, "dropped within column");
            let next = reorder(board, column.id(), from, to);
            store.commit(next)?;
        }
        Ok(store.board().clone())
    }
}

//! StartDrag command

use crate::drag::{DragOrigin, DragSession};
use crate::error::{Result, TaskboardError};
use crate::operation::Execute;
use crate::store::BoardStore;
use crate::types::{Board, TaskId};
use tracing::debug;

/// Pick up a task: `idle -> dragging(task)`
#[derive(Debug, Clone)]
pub struct StartDrag {
    /// The task being picked up
    pub id: TaskId,
}

impl StartDrag {
    /// Create a new StartDrag command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute for StartDrag {
    type Output = Board;

    fn op(&self) -> &'static str {
        "start drag"
    }

    fn execute(&self, store: &mut BoardStore) -> Result<Board> {
        if let Some(active) = store.drag().active_task() {
            return Err(TaskboardError::DragInProgress {
                id: active.to_string(),
            });
        }

        let board = store.board();
        let origin = board
            .column_of(&self.id)
            .and_then(|column| {
                board.column(column)?.position(&self.id).map(|index| DragOrigin { column, index })
            })
            .ok_or_else(|| TaskboardError::TaskNotFound {
                id: self.id.to_string(),
            })?;

        debug!(task = %self.id, column = %origin.column, index = origin.index, "drag started");
        store.set_drag(DragSession::Dragging {
            task: self.id.clone(),
            origin,
        });
        Ok(store.board().clone())
    }
}

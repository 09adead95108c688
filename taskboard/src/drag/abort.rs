//! AbortDrag command

use crate::drag::{restored, DragSession};
use crate::error::Result;
use crate::operation::Execute;
use crate::store::BoardStore;
use crate::types::Board;
use tracing::debug;

/// Cancel the drag: `dragging -> idle`.
///
/// Transfers committed while hovering stay in place unless
/// `drag.restore_on_abort` is set, in which case the task goes back to the
/// column and index it was picked up from.
#[derive(Debug, Clone, Default)]
pub struct AbortDrag;

impl AbortDrag {
    /// Create a new AbortDrag command
    pub fn new() -> Self {
        Self
    }
}

impl Execute for AbortDrag {
    type Output = Board;

    fn op(&self) -> &'static str {
        "abort drag"
    }

    fn execute(&self, store: &mut BoardStore) -> Result<Board> {
        if let DragSession::Dragging { task, origin } = store.take_drag() {
            debug!(%task, "drag aborted");
            if store.drag_config().restore_on_abort {
                if let Some(next) = restored(store.board(), &task, origin) {
                    store.commit(next)?;
                }
            }
        }
        Ok(store.board().clone())
    }
}

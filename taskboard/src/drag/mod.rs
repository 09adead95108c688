//! Drag session tracking
//!
//! A drag is a small state machine: `Idle` until a task is picked up,
//! `Dragging` until it is dropped or the drag is aborted. Hovering another
//! column commits the transfer straight away, so the board the UI renders
//! is always the live board; there is no separate preview buffer.

mod abort;
mod drop;
mod over;
mod start;

pub use abort::AbortDrag;
pub use drop::DropTask;
pub use over::DragOver;
pub use start::StartDrag;

use crate::moves::transfer;
use crate::types::{Board, Status, TaskId};

/// Where a drag began
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOrigin {
    pub column: Status,
    pub index: usize,
}

/// State of the drag session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging { task: TaskId, origin: DragOrigin },
}

impl DragSession {
    /// Check if no drag is active
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The task being dragged, if any
    pub fn active_task(&self) -> Option<&TaskId> {
        match self {
            Self::Idle => None,
            Self::Dragging { task, .. } => Some(task),
        }
    }
}

/// Resolve the id under the pointer to a column.
///
/// The id may name a column directly or a task, meaning that task's column.
/// Column ids are checked first.
pub fn resolve_target(board: &Board, over_id: &str) -> Option<Status> {
    if let Ok(status) = over_id.parse::<Status>() {
        if board.column(status).is_some() {
            return Some(status);
        }
    }
    board.column_of(&TaskId::from(over_id))
}

/// Board with the dragged task put back at its origin.
///
/// Returns `None` when the task is already there or no longer on the board.
pub(crate) fn restored(board: &Board, task: &TaskId, origin: DragOrigin) -> Option<Board> {
    let current = board.column_of(task)?;
    let index = board.column(current)?.position(task)?;
    if current == origin.column && index == origin.index {
        return None;
    }

    let dest_index = if current == origin.column {
        let last = board.column(current)?.len().saturating_sub(1);
        origin.index.min(last)
    } else {
        origin.index
    };
    Some(transfer(board, task, current, origin.column, Some(dest_index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_board;

    #[test]
    fn test_resolve_column_and_task_ids() {
        let board = seed_board();
        assert_eq!(resolve_target(&board, "done"), Some(Status::Done));
        assert_eq!(resolve_target(&board, "inProgress"), Some(Status::InProgress));
        assert_eq!(resolve_target(&board, "task-2"), Some(Status::InProgress));
        assert_eq!(resolve_target(&board, "task-4"), Some(Status::Todo));
        assert_eq!(resolve_target(&board, "nowhere"), None);
    }

    #[test]
    fn test_resolve_missing_column_falls_back_to_tasks() {
        let board = Board::with_columns([crate::types::Column::new(Status::Todo, "To Do")]);
        assert_eq!(resolve_target(&board, "done"), None);
    }

    #[test]
    fn test_session_accessors() {
        let idle = DragSession::default();
        assert!(idle.is_idle());
        assert!(idle.active_task().is_none());

        let dragging = DragSession::Dragging {
            task: "task-1".into(),
            origin: DragOrigin {
                column: Status::Done,
                index: 0,
            },
        };
        assert!(!dragging.is_idle());
        assert_eq!(dragging.active_task().map(TaskId::as_str), Some("task-1"));
    }

    #[test]
    fn test_restored_moves_task_home() {
        let board = seed_board();
        let task = TaskId::from("task-3");
        let origin = DragOrigin {
            column: Status::Todo,
            index: 0,
        };
        assert!(restored(&board, &task, origin).is_none());

        let moved = transfer(&board, &task, Status::Todo, Status::Done, None);
        let back = restored(&moved, &task, origin).unwrap();
        assert_eq!(back, board);
    }
}

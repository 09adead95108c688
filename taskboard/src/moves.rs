//! Move reducer: same-column reorder and cross-column transfer
//!
//! Both reducers take the current board by reference and return the next
//! board. The result shares every task and column it did not touch with the
//! input, so a caller can keep the old board around for comparison or
//! rollback at pointer-copy cost.
//!
//! Neither reducer fails. Indices come from a rendered list and are in range
//! in practice; anything out of range, or naming a task or column the board
//! does not have, returns the board unchanged and logs a warning.

use crate::types::{Board, Status, TaskId};
use tracing::warn;

/// Move the element at `from` so that it ends up at index `to`.
///
/// Removal then insertion: the intervening elements shift by one toward the
/// vacated slot. Returns `false` and leaves `items` untouched when either
/// index is out of range.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
    true
}

/// Reorder a task within a column.
pub fn reorder(board: &Board, column: Status, from: usize, to: usize) -> Board {
    let Some(len) = board.column(column).map(|c| c.len()) else {
        warn!(%column, "reorder on unknown column ignored");
        return board.clone();
    };
    if from >= len || to >= len {
        warn!(%column, from, to, len, "reorder index out of range ignored");
        return board.clone();
    }

    let mut next = board.clone();
    if from == to {
        return next;
    }
    if let Some(target) = next.column_mut(column) {
        array_move(&mut target.task_ids, from, to);
    }
    next
}

/// Transfer a task from `source` to `dest`.
///
/// The task leaves `source`, lands in `dest` (appended when `dest_index` is
/// `None`, otherwise inserted at `dest_index` clamped to the end) and takes
/// `dest` as its status. When `source == dest` this is exactly
/// [`reorder`] from the task's current index to `dest_index`, or to the last
/// slot when no index is given.
pub fn transfer(
    board: &Board,
    task: &TaskId,
    source: Status,
    dest: Status,
    dest_index: Option<usize>,
) -> Board {
    let Some(from) = board.column(source).and_then(|c| c.position(task)) else {
        warn!(%task, %source, "transfer of task not in source column ignored");
        return board.clone();
    };

    if source == dest {
        let last = board.column(source).map_or(0, |c| c.len().saturating_sub(1));
        return reorder(board, source, from, dest_index.unwrap_or(last));
    }

    if board.column(dest).is_none() {
        warn!(%task, %dest, "transfer to unknown column ignored");
        return board.clone();
    }
    if !board.contains_task(task) {
        warn!(%task, "transfer of unknown task ignored");
        return board.clone();
    }

    let mut next = board.clone();
    if let Some(column) = next.column_mut(source) {
        column.task_ids.remove(from);
    }
    if let Some(column) = next.column_mut(dest) {
        let index = dest_index.map_or(column.task_ids.len(), |i| i.min(column.task_ids.len()));
        column.task_ids.insert(index, task.clone());
    }
    if let Some(record) = next.task_mut(task) {
        record.status = dest;
    }
    next
}

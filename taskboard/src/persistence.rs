//! Board snapshots: JSON (de)serialization and load-or-seed

use crate::error::Result;
use crate::seed::seed_board;
use crate::storage::BoardStorage;
use crate::types::Board;
use tracing::{debug, info, warn};

/// Default storage key for the board snapshot
pub const DEFAULT_KEY: &str = "taskBoard";

/// Serialize a board to its snapshot form
pub fn serialize(board: &Board) -> Result<String> {
    Ok(serde_json::to_string_pretty(board)?)
}

/// Parse a snapshot and check every board invariant
pub fn deserialize(content: &str) -> Result<Board> {
    let board: Board = serde_json::from_str(content)?;
    board.validate()?;
    Ok(board)
}

/// Load the board stored under `key`, falling back to the seed board.
///
/// A missing, unreadable or invalid snapshot is never reported to the
/// caller; it is logged and the seed board is returned instead.
pub fn load_or_seed(storage: &dyn BoardStorage, key: &str) -> Board {
    let content = match storage.read(key) {
        Ok(Some(content)) => content,
        Ok(None) => {
            debug!(key, "no stored board, using seed data");
            return seed_board();
        }
        Err(error) => {
            warn!(key, %error, "failed to read stored board, using seed data");
            return seed_board();
        }
    };

    match deserialize(&content) {
        Ok(board) => {
            info!(key, tasks = board.task_count(), "loaded stored board");
            board
        }
        Err(error) => {
            warn!(key, %error, "discarding invalid stored board, using seed data");
            seed_board()
        }
    }
}

//! BoardStore - the single owner of board state
//!
//! The store holds the committed board, the storage slot it persists to and
//! the current drag session. Reads go through [`BoardStore::board`]; every
//! change goes through [`BoardStore::commit`], which writes the snapshot
//! before swapping the new board in.

use crate::config::{DragConfig, TaskboardConfig};
use crate::drag::DragSession;
use crate::error::Result;
use crate::operation::Execute;
use crate::persistence::{self, DEFAULT_KEY};
use crate::storage::{validate_key, BoardStorage, FileStorage, MemoryStorage};
use crate::types::Board;
use std::time::Instant;
use tracing::{debug, info_span, trace};

/// Owns the board, its storage slot and the drag session
pub struct BoardStore {
    board: Board,
    storage: Box<dyn BoardStorage>,
    key: String,
    drag: DragSession,
    drag_config: DragConfig,
}

impl BoardStore {
    /// Open file storage from configuration and load the board
    pub fn open(config: &TaskboardConfig) -> Result<Self> {
        validate_key(&config.storage.key)?;
        let storage = FileStorage::open(&config.storage.dir)?;
        Ok(Self::with_storage(storage, config.storage.key.clone())
            .with_drag_config(config.drag.clone()))
    }

    /// Load the board from `storage`, falling back to the seed board
    pub fn with_storage(storage: impl BoardStorage + 'static, key: impl Into<String>) -> Self {
        let key = key.into();
        let board = persistence::load_or_seed(&storage, &key);
        Self {
            board,
            storage: Box::new(storage),
            key,
            drag: DragSession::Idle,
            drag_config: DragConfig::default(),
        }
    }

    /// A store backed by in-process memory, starting from the seed board
    pub fn in_memory() -> Self {
        Self::with_storage(MemoryStorage::new(), DEFAULT_KEY)
    }

    /// Set drag session behaviour
    pub fn with_drag_config(mut self, drag_config: DragConfig) -> Self {
        self.drag_config = drag_config;
        self
    }

    /// The committed board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current drag session
    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// Drag session behaviour
    pub fn drag_config(&self) -> &DragConfig {
        &self.drag_config
    }

    /// Storage key of the snapshot
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The storage slot backing this store
    pub fn storage(&self) -> &dyn BoardStorage {
        self.storage.as_ref()
    }

    pub(crate) fn set_drag(&mut self, drag: DragSession) {
        self.drag = drag;
    }

    /// End the drag session, returning what it was
    pub(crate) fn take_drag(&mut self) -> DragSession {
        std::mem::take(&mut self.drag)
    }

    /// Persist `next` and make it the committed board.
    ///
    /// The snapshot is written before the swap; if validation or the write
    /// fails the previous board stays committed. A board equal to the current
    /// one is not written again.
    pub fn commit(&mut self, next: Board) -> Result<()> {
        if next == self.board {
            trace!(key = %self.key, "commit skipped, board unchanged");
            return Ok(());
        }
        next.validate()?;

        let content = persistence::serialize(&next)?;
        self.storage.write(&self.key, &content)?;
        trace!(key = %self.key, bytes = content.len(), "committed board");

        self.board = next;
        Ok(())
    }

    /// Execute an intent inside a tracing span
    pub fn process<E: Execute>(&mut self, op: &E) -> Result<E::Output> {
        let span = info_span!("taskboard_op", op = op.op());
        let _guard = span.enter();

        let start = Instant::now();
        let result = op.execute(self);
        let duration_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(_) => debug!(duration_ms, "operation completed"),
            Err(error) => debug!(duration_ms, %error, "operation failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskboardError;
    use crate::moves::transfer;
    use crate::seed::seed_board;
    use crate::types::{Status, TaskId};
    use tempfile::TempDir;

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl BoardStorage for ReadOnlyStorage {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    fn moved(board: &Board) -> Board {
        transfer(
            board,
            &TaskId::from("task-3"),
            Status::Todo,
            Status::Done,
            None,
        )
    }

    #[test]
    fn test_in_memory_starts_from_seed() {
        let store = BoardStore::in_memory();
        assert_eq!(store.board(), &seed_board());
        assert!(store.drag().is_idle());
        assert_eq!(store.key(), "taskBoard");
    }

    #[test]
    fn test_commit_persists_before_swap() {
        let mut store = BoardStore::in_memory();
        let next = moved(store.board());
        store.commit(next.clone()).unwrap();

        assert_eq!(store.board(), &next);
        let stored = store.storage().read("taskBoard").unwrap().unwrap();
        assert_eq!(persistence::deserialize(&stored).unwrap(), next);
    }

    #[test]
    fn test_commit_of_unchanged_board_skips_write() {
        let mut store = BoardStore::in_memory();
        store.commit(store.board().clone()).unwrap();
        assert_eq!(store.storage().read("taskBoard").unwrap(), None);
    }

    #[test]
    fn test_failed_write_keeps_previous_board() {
        let mut store = BoardStore::with_storage(ReadOnlyStorage, "taskBoard");
        let next = moved(store.board());

        let err = store.commit(next).unwrap_err();
        assert!(matches!(err, TaskboardError::Io(_)));
        assert_eq!(store.board(), &seed_board());
    }

    #[test]
    fn test_commit_rejects_invalid_board() {
        let mut store = BoardStore::in_memory();
        let mut value = serde_json::to_value(store.board()).unwrap();
        value["columns"]["todo"]["taskIds"] = serde_json::json!(["task-3", "task-4", "task-1"]);
        let invalid: Board = serde_json::from_value(value).unwrap();

        let err = store.commit(invalid).unwrap_err();
        assert!(matches!(err, TaskboardError::Corrupt { .. }));
        assert_eq!(store.board(), &seed_board());
        assert_eq!(store.storage().read("taskBoard").unwrap(), None);
    }

    #[test]
    fn test_open_reloads_committed_board() {
        let temp = TempDir::new().unwrap();
        let mut config = TaskboardConfig::default();
        config.storage.dir = temp.path().join(".taskboard");

        let next = {
            let mut store = BoardStore::open(&config).unwrap();
            let next = moved(store.board());
            store.commit(next.clone()).unwrap();
            next
        };

        let store = BoardStore::open(&config).unwrap();
        assert_eq!(store.board(), &next);
    }

    #[test]
    fn test_open_twice_is_busy() {
        let temp = TempDir::new().unwrap();
        let mut config = TaskboardConfig::default();
        config.storage.dir = temp.path().to_path_buf();

        let _first = BoardStore::open(&config).unwrap();
        assert!(matches!(
            BoardStore::open(&config),
            Err(TaskboardError::StorageBusy { .. })
        ));
    }

    #[test]
    fn test_open_rejects_key_outside_directory() {
        let temp = TempDir::new().unwrap();
        let mut config = TaskboardConfig::default();
        config.storage.dir = temp.path().join(".taskboard");
        config.storage.key = "../board".to_string();

        let err = BoardStore::open(&config).err().unwrap();
        assert!(err.is_validation());
        assert!(!temp.path().join(".taskboard").exists());
    }

    #[test]
    fn test_open_applies_drag_config() {
        let temp = TempDir::new().unwrap();
        let mut config = TaskboardConfig::default();
        config.storage.dir = temp.path().to_path_buf();
        config.drag.restore_on_abort = true;

        let store = BoardStore::open(&config).unwrap();
        assert!(store.drag_config().restore_on_abort);
    }
}

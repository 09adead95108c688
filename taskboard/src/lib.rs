//! Kanban task-board ordering engine
//!
//! This crate keeps an ordered set of columns, each holding an ordered list of
//! task ids, consistent under drag-initiated moves and task edits, and
//! persists every committed change as a JSON snapshot.
//!
//! ## Overview
//!
//! - **One owner** - a [`BoardStore`] holds the board; every change is a commit
//! - **Status is the column** - a task's [`Status`] always names the column holding it
//! - **Live drag** - hovering another column moves the task immediately
//! - **Snapshot per commit** - the whole board is written before the new state is visible
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use taskboard::{
//!     drag::{DragOver, DropTask, StartDrag},
//!     task::{CreateTask, DeleteTask},
//!     BoardStore, TaskboardConfig,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TaskboardConfig::load(".")?;
//! let mut store = BoardStore::open(&config)?;
//!
//! // Add a task
//! let create = CreateTask::new("Implement feature X").with_description("Add the new feature");
//! store.process(&create)?;
//!
//! // Drag it into the done column
//! store.process(&StartDrag::new(create.id()))?;
//! store.process(&DragOver::new("done"))?;
//! let board = store.process(&DropTask::new("done"))?;
//! println!("done: {:?}", board.column(taskboard::Status::Done));
//!
//! store.process(&DeleteTask::new(create.id()))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Snapshot Layout
//!
//! ```text
//! .taskboard/
//! ├── .lock               # held while a store has the directory open
//! └── taskBoard.json      # { tasks, columns, columnOrder }
//! ```

mod config;
mod error;
mod operation;
mod store;

pub mod drag;
pub mod moves;
pub mod persistence;
pub mod seed;
pub mod storage;
pub mod task;
pub mod types;

pub use config::{DragConfig, StorageConfig, TaskboardConfig};
pub use error::{Result, TaskboardError};
pub use operation::Execute;
pub use store::BoardStore;

// Re-export commonly used types
pub use types::{Board, Column, Priority, Status, Task, TaskId};

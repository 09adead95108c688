//! Core types for the taskboard engine

mod board;
mod ids;
mod status;
mod task;

// Re-export all types
pub use board::{Board, Column};
pub use ids::TaskId;
pub use status::{Priority, Status};
pub use task::Task;
pub(crate) use task::{normalize_description, normalize_tags, normalize_title};

//! Error types for the taskboard engine

use std::path::PathBuf;
use thiserror::Error;

/// Result type for taskboard operations
pub type Result<T> = std::result::Result<T, TaskboardError>;

/// Errors that can occur in taskboard operations
#[derive(Debug, Error)]
pub enum TaskboardError {
    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// A drag session is already active
    #[error("drag already in progress for task {id}")]
    DragInProgress { id: String },

    /// Persisted snapshot violates a board invariant
    #[error("corrupt board snapshot: {message}")]
    Corrupt { message: String },

    /// Storage directory is locked by another store
    #[error("storage busy - {path} is locked by another store")]
    StorageBusy { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration extraction error
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl TaskboardError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Create a corrupt snapshot error
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt {
            message: message.into(),
        }
    }

    /// Check if this error belongs on a form field rather than in a log
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }
}

impl From<figment::Error> for TaskboardError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}

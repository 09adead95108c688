//! Status and priority enums
//!
//! `Status` doubles as the column identifier: a task's status is always the
//! id of the column holding it.

use crate::error::TaskboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow stage of a task, and the id of the column for that stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// All statuses in default display order
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    /// Wire name of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }

    /// Default column title for this status
    pub fn default_title(&self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TaskboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TaskboardError::ColumnNotFound { id: s.to_string() })
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"inProgress\""
        );
        for status in Status::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("done".parse::<Status>().unwrap(), Status::Done);
        assert_eq!("inProgress".parse::<Status>().unwrap(), Status::InProgress);
        assert!("in_progress".parse::<Status>().is_err());

        let err = "task-1".parse::<Status>().unwrap_err();
        assert!(matches!(err, TaskboardError::ColumnNotFound { ref id } if id == "task-1"));
    }

    #[test]
    fn test_priority_default_and_wire_names() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
    }
}

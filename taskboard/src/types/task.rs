//! Task type

use super::ids::TaskId;
use super::status::{Priority, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task/card on the board.
///
/// `status` is readable through [`Task::status`] but has no public setter:
/// it always names the column holding the task, and only the transfer
/// reducer in [`crate::moves`] moves a task between columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub(crate) id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub(crate) status: Status,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Task {
    /// Create a task with default priority and no description, due date or tags
    pub fn new(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        status: Status,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            status,
            priority: Priority::default(),
            due_date: None,
            created_at,
            tags: Vec::new(),
        }
    }

    /// Get the task's ID
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Get the task's status (the id of its column)
    pub fn status(&self) -> Status {
        self.status
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Normalize a title: trimmed, and rejected when nothing is left.
pub(crate) fn normalize_title(title: &str) -> Option<String> {
    let trimmed = title.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Normalize a description: trimmed, with an empty result meaning "none".
pub(crate) fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

/// Normalize tags: trimmed, empties dropped, first occurrence wins.
pub(crate) fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

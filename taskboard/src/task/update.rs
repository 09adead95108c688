//! UpdateTask command

use crate::error::{Result, TaskboardError};
use crate::moves::transfer;
use crate::operation::Execute;
use crate::store::BoardStore;
use crate::types::{
    normalize_description, normalize_tags, normalize_title, Board, Priority, Status, Task, TaskId,
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Update an existing task.
///
/// A status change moves the task to the end of the new column; the move and
/// the field changes are committed together. `created_at` never changes.
#[derive(Debug, Clone)]
pub struct UpdateTask {
    /// The task ID to update
    pub id: TaskId,
    /// New title
    pub title: Option<String>,
    /// New description (None = don't change, Some(None) = clear, Some(Some(x)) = set)
    pub description: Option<Option<String>>,
    /// New status, i.e. target column
    pub status: Option<Status>,
    /// New priority
    pub priority: Option<Priority>,
    /// New due date (None = don't change, Some(None) = clear, Some(Some(x)) = set)
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Replace all tags
    pub tags: Option<Vec<String>>,
}

impl UpdateTask {
    /// Create a new UpdateTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            status: None,
            priority: None,
            due_date: None,
            tags: None,
        }
    }

    /// Update every editable field from an edited copy of a task
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().clone(),
            title: Some(task.title.clone()),
            description: Some(task.description.clone()),
            status: Some(task.status()),
            priority: Some(task.priority),
            due_date: Some(task.due_date),
            tags: Some(task.tags.clone()),
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clear the description
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Move the task to another column
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clear the due date
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Set the tags (replaces all existing tags)
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

impl Execute for UpdateTask {
    type Output = Board;

    fn op(&self) -> &'static str {
        "update task"
    }

    fn execute(&self, store: &mut BoardStore) -> Result<Board> {
        let title = match &self.title {
            Some(title) => Some(
                normalize_title(title)
                    .ok_or_else(|| TaskboardError::invalid_value("title", "title cannot be empty"))?,
            ),
            None => None,
        };

        let board = store.board();
        let current = board
            .task(&self.id)
            .map(Task::status)
            .ok_or_else(|| TaskboardError::TaskNotFound {
                id: self.id.to_string(),
            })?;

        let mut next = match self.status {
            Some(status) if status != current => {
                if board.column(status).is_none() {
                    return Err(TaskboardError::ColumnNotFound {
                        id: status.to_string(),
                    });
                }
                debug!(task = %self.id, from = %current, to = %status, "status change moves task");
                transfer(board, &self.id, current, status, None)
            }
            _ => board.clone(),
        };

        if let Some(task) = next.task_mut(&self.id) {
            if let Some(title) = title {
                task.title = title;
            }
            if let Some(description) = &self.description {
                task.description = normalize_description(description.as_deref());
            }
            if let Some(priority) = self.priority {
                task.priority = priority;
            }
            if let Some(due_date) = self.due_date {
                task.due_date = due_date;
            }
            if let Some(tags) = &self.tags {
                task.tags = normalize_tags(tags);
            }
        }

        store.commit(next)?;
        Ok(store.board().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_board;
    use chrono::TimeZone;
    use std::sync::Arc;

    #[test]
    fn test_update_fields_in_place() {
        let mut store = BoardStore::in_memory();
        let board = store
            .process(
                &UpdateTask::new("task-3")
                    .with_title("Redesign dashboard")
                    .with_description("New layout")
                    .with_priority(Priority::High)
                    .with_tags(["ui"]),
            )
            .unwrap();

        let task = board.task(&"task-3".into()).unwrap();
        assert_eq!(task.title, "Redesign dashboard");
        assert_eq!(task.description.as_deref(), Some("New layout"));
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.tags, vec!["ui"]);
        assert_eq!(
            board.column(Status::Todo).unwrap().task_ids(),
            seed_board().column(Status::Todo).unwrap().task_ids()
        );
    }

    #[test]
    fn test_update_in_place_shares_columns() {
        let mut store = BoardStore::in_memory();
        let before = store.board().clone();
        let after = store
            .process(&UpdateTask::new("task-4").with_title("Charts"))
            .unwrap();
        for status in Status::ALL {
            assert!(Arc::ptr_eq(&before.columns[&status], &after.columns[&status]));
        }
    }

    #[test]
    fn test_update_status_transfers_to_end() {
        let mut store = BoardStore::in_memory();
        let board = store
            .process(&UpdateTask::new("task-3").with_status(Status::Done).with_title("Done UI"))
            .unwrap();

        assert_eq!(board.column_of(&"task-3".into()), Some(Status::Done));
        assert_eq!(
            board.column(Status::Done).unwrap().task_ids().last().map(TaskId::as_str),
            Some("task-3")
        );
        assert_eq!(board.task(&"task-3".into()).unwrap().title, "Done UI");
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_update_from_edited_task() {
        let mut store = BoardStore::in_memory();
        let mut edited = store.board().task(&"task-2".into()).unwrap().clone();
        edited.title = "Implement OAuth".to_string();
        edited.due_date = None;
        edited.description = Some("  ".to_string());

        let board = store.process(&UpdateTask::from_task(&edited)).unwrap();
        let task = board.task(&"task-2".into()).unwrap();
        assert_eq!(task.title, "Implement OAuth");
        assert!(task.due_date.is_none());
        assert!(task.description.is_none());
        assert_eq!(task.created_at, edited.created_at);
        assert_eq!(task.status(), Status::InProgress);
    }

    #[test]
    fn test_update_clears_optional_fields() {
        let mut store = BoardStore::in_memory();
        let board = store
            .process(&UpdateTask::new("task-2").clear_description().clear_due_date())
            .unwrap();
        let task = board.task(&"task-2".into()).unwrap();
        assert!(task.description.is_none());
        assert!(task.due_date.is_none());
    }

    #[test]
    fn test_update_keeps_created_at() {
        let mut store = BoardStore::in_memory();
        let due = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let before = store.board().task(&"task-1".into()).unwrap().created_at;
        let board = store
            .process(&UpdateTask::new("task-1").with_due_date(due))
            .unwrap();
        let task = board.task(&"task-1".into()).unwrap();
        assert_eq!(task.created_at, before);
        assert_eq!(task.due_date, Some(due));
    }

    #[test]
    fn test_update_empty_title_blocks_commit() {
        let mut store = BoardStore::in_memory();
        let result = store.process(&UpdateTask::new("task-1").with_title(" ").with_status(Status::Todo));
        assert!(result.unwrap_err().is_validation());
        assert_eq!(store.board(), &seed_board());
    }

    #[test]
    fn test_update_missing_task() {
        let mut store = BoardStore::in_memory();
        let result = store.process(&UpdateTask::new("nope").with_title("x"));
        assert!(matches!(result, Err(TaskboardError::TaskNotFound { .. })));
    }
}

//! CreateTask command

use crate::error::{Result, TaskboardError};
use crate::operation::Execute;
use crate::store::BoardStore;
use crate::types::{
    normalize_description, normalize_tags, normalize_title, Board, Priority, Status, Task, TaskId,
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Add a new task to the board.
///
/// The id is fixed when the command is built so the caller knows it before
/// the task exists.
#[derive(Debug, Clone)]
pub struct CreateTask {
    /// The id the new task will get
    pub id: TaskId,
    /// The task title (required, trimmed, non-empty)
    pub title: String,
    /// Detailed task description
    pub description: Option<String>,
    /// Column the task starts in
    pub status: Status,
    /// Task priority
    pub priority: Priority,
    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,
    /// Creation time, defaults to now
    pub created_at: Option<DateTime<Utc>>,
    /// Tags to apply
    pub tags: Vec<String>,
}

impl CreateTask {
    /// Create a new CreateTask command with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: None,
            status: Status::Todo,
            priority: Priority::default(),
            due_date: None,
            created_at: None,
            tags: Vec::new(),
        }
    }

    /// The id the new task will get
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Use a specific id instead of a generated one
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the starting column
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
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

    /// Set the creation time
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
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

impl Execute for CreateTask {
    type Output = Board;

    fn op(&self) -> &'static str {
        "create task"
    }

    fn execute(&self, store: &mut BoardStore) -> Result<Board> {
        let title = normalize_title(&self.title)
            .ok_or_else(|| TaskboardError::invalid_value("title", "title cannot be empty"))?;

        let board = store.board();
        if board.contains_task(&self.id) {
            return Err(TaskboardError::duplicate_id("task", self.id.as_str()));
        }
        if board.column(self.status).is_none() {
            return Err(TaskboardError::ColumnNotFound {
                id: self.status.to_string(),
            });
        }

        let mut task = Task::new(
            self.id.clone(),
            title,
            self.status,
            self.created_at.unwrap_or_else(Utc::now),
        )
        .with_priority(self.priority)
        .with_tags(normalize_tags(&self.tags));
        task.description = normalize_description(self.description.as_deref());
        task.due_date = self.due_date;

        let mut next = board.clone();
        next.push_task(task);
        store.commit(next)?;

        debug!(task = %self.id, column = %self.status, "created task");
        Ok(store.board().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_task_appends_to_todo() {
        let mut store = BoardStore::in_memory();
        let cmd = CreateTask::new("Write tests");
        let board = store.process(&cmd).unwrap();

        let task = board.task(cmd.id()).unwrap();
        assert_eq!(task.title, "Write tests");
        assert_eq!(task.status(), Status::Todo);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(
            board.column(Status::Todo).unwrap().task_ids().last(),
            Some(cmd.id())
        );
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_create_task_normalizes_fields() {
        let mut store = BoardStore::in_memory();
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let cmd = CreateTask::new("  Ship release  ")
            .with_description("   ")
            .with_status(Status::InProgress)
            .with_priority(Priority::High)
            .with_created_at(created)
            .with_tags([" release", "ops", "", "release "]);
        let board = store.process(&cmd).unwrap();

        let task = board.task(cmd.id()).unwrap();
        assert_eq!(task.title, "Ship release");
        assert!(task.description.is_none());
        assert_eq!(task.tags, vec!["release", "ops"]);
        assert_eq!(task.created_at, created);
        assert_eq!(board.column_of(cmd.id()), Some(Status::InProgress));
    }

    #[test]
    fn test_create_task_empty_title_blocks_commit() {
        let mut store = BoardStore::in_memory();
        let before = store.board().clone();

        let err = store.process(&CreateTask::new("   ")).unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(
            err,
            TaskboardError::InvalidValue { ref field, .. } if field == "title"
        ));
        assert_eq!(store.board(), &before);
        assert_eq!(store.storage().read(store.key()).unwrap(), None);
    }

    #[test]
    fn test_create_task_duplicate_id() {
        let mut store = BoardStore::in_memory();
        let result = store.process(&CreateTask::new("Again").with_id("task-1"));
        assert!(matches!(result, Err(TaskboardError::DuplicateId { .. })));
    }

    #[test]
    fn test_create_task_missing_column() {
        let board = Board::with_columns([crate::types::Column::new(Status::Todo, "To Do")]);
        let storage = crate::storage::MemoryStorage::with_slot(
            "taskBoard",
            crate::persistence::serialize(&board).unwrap(),
        );
        let mut store = BoardStore::with_storage(storage, "taskBoard");

        let result = store.process(&CreateTask::new("Later").with_status(Status::Done));
        assert!(matches!(result, Err(TaskboardError::ColumnNotFound { .. })));
    }
}

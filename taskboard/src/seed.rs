//! Built-in seed board used when no valid snapshot is stored

use crate::types::{Board, Priority, Status, Task};
use chrono::{DateTime, TimeZone, Utc};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The default board: four sample tasks across the three default columns.
///
/// `todo: [task-3, task-4]`, `inProgress: [task-2]`, `done: [task-1]`.
pub fn seed_board() -> Board {
    let mut board = Board::new();

    let tasks = [
        Task::new("task-3", "Design dashboard UI", Status::Todo, date(2023, 1, 25))
            .with_due_date(date(2023, 2, 25))
            .with_tags(["ui", "design"]),
        Task::new("task-4", "Add data visualization", Status::Todo, date(2023, 1, 30))
            .with_description("Implement charts and graphs for analytics")
            .with_priority(Priority::Low)
            .with_tags(["charts", "data"]),
        Task::new(
            "task-2",
            "Implement authentication",
            Status::InProgress,
            date(2023, 1, 20),
        )
        .with_description("Add login, registration and password reset")
        .with_priority(Priority::High)
        .with_due_date(date(2023, 2, 20))
        .with_tags(["auth", "security"]),
        Task::new("task-1", "Set up project foundation", Status::Done, date(2025, 4, 13))
            .with_description("Home page, routing, contexts")
            .with_priority(Priority::High)
            .with_tags(["setup", "architecture"]),
    ];

    for task in tasks {
        board.push_task(task);
    }
    board
}

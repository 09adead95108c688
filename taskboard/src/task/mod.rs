//! Task commands

mod create;
mod delete;
mod get;
mod mv;
mod update;

pub use create::CreateTask;
pub use delete::DeleteTask;
pub use get::GetTask;
pub use mv::MoveTask;
pub use update::UpdateTask;

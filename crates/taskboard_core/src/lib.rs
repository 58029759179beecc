//! Core domain logic for Taskboard.
//! This crate is the single source of truth for task state and invariants.

pub mod filter;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use filter::{filter_tasks, TaskFilter};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::task::{
    normalize_description, NewTask, Task, TaskFieldParseError, TaskInput, TaskPatch,
    TaskPriority, TaskResult, TaskStatus, TaskTitle, TaskValidationError, MAX_TITLE_CHARS,
};
pub use model::task_id::{
    RandomTaskIdGenerator, SequentialTaskIdGenerator, TaskId, TaskIdGenerator,
};
pub use service::task_service::{Listener, SubscriptionId, TaskAccess, TaskService};
pub use store::task_store::{TaskSnapshot, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Task filter predicate.
//!
//! # Responsibility
//! - Combine optional status/priority criteria into a membership test.
//! - Derive visible subsets from caller-supplied snapshots.
//!
//! # Invariants
//! - Filtering is pure: inputs are only borrowed immutably.
//! - Absent criteria match every task.
//! - Output preserves input order.

use crate::model::task::{Task, TaskFieldParseError, TaskPriority, TaskStatus};

/// Optional status/priority criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl TaskFilter {
    /// Filter matching every task.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Parses select-style criteria where an empty value means "all".
    ///
    /// # Errors
    /// Returns a parse error for any non-empty unknown value.
    pub fn from_criteria(status: &str, priority: &str) -> Result<Self, TaskFieldParseError> {
        Ok(Self {
            status: parse_criterion(status)?,
            priority: parse_criterion(priority)?,
        })
    }

    /// Returns whether no criterion is set.
    pub fn is_unfiltered(&self) -> bool {
        self.status.is_none() && self.priority.is_none()
    }

    /// Membership test: every present criterion must equal the task field.
    pub fn matches(&self, task: &Task) -> bool {
        self.status.map_or(true, |status| task.status == status)
            && self.priority.map_or(true, |priority| task.priority == priority)
    }

    /// Borrows the matching tasks in their original order.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        filter_tasks(tasks, *self).collect()
    }
}

/// Lazily yields the tasks matching `filter`, in order.
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(move |task| filter.matches(task))
}

fn parse_criterion<T>(value: &str) -> Result<Option<T>, TaskFieldParseError>
where
    T: std::str::FromStr<Err = TaskFieldParseError>,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

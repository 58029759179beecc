//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its enumerated fields.
//! - Validate raw caller input into store-ready values.
//! - Define partial-update patches.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - `title` is held as a `TaskTitle`, so an empty or over-length title
//!   cannot be represented.
//! - `description` is `None` when absent; it is never `Some("")`.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use crate::model::task_id::TaskId;

/// Maximum title length in Unicode scalar values, counted after trimming.
pub const MAX_TITLE_CHARS: usize = 100;

/// Urgency of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    /// All priorities in ascending order.
    pub const ALL: [TaskPriority; 3] = [Self::Low, Self::Medium, Self::High];

    /// Stable wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = TaskFieldParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(TaskFieldParseError::UnknownPriority(other.to_string())),
        }
    }
}

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Created but not started.
    #[default]
    #[serde(rename = "todo")]
    Todo,
    /// Work is in progress.
    #[serde(rename = "in-progress")]
    InProgress,
    /// Completed.
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Stable wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Next status in the cycle `todo -> in-progress -> done -> todo`.
    pub fn next(self) -> Self {
        match self {
            Self::Todo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::Todo,
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskFieldParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(TaskFieldParseError::UnknownStatus(other.to_string())),
        }
    }
}

/// Parse errors for enumerated task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFieldParseError {
    UnknownStatus(String),
    UnknownPriority(String),
}

impl Display for TaskFieldParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStatus(value) => write!(
                f,
                "unknown task status `{value}`; expected todo|in-progress|done"
            ),
            Self::UnknownPriority(value) => write!(
                f,
                "unknown task priority `{value}`; expected low|medium|high"
            ),
        }
    }
}

impl Error for TaskFieldParseError {}

/// Validation errors for caller-supplied task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace only.
    EmptyTitle,
    /// Title exceeds `MAX_TITLE_CHARS` after trimming.
    TitleTooLong { chars: usize, max: usize },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::TitleTooLong { chars, max } => {
                write!(f, "task title is {chars} characters; at most {max} allowed")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// Result alias for task input validation.
pub type TaskResult<T> = Result<T, TaskValidationError>;

/// Validated task title.
///
/// Only constructible through [`TaskTitle::parse`], which trims surrounding
/// whitespace and enforces the length bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Trims and validates a raw title.
    ///
    /// # Errors
    /// - `EmptyTitle` when nothing remains after trimming.
    /// - `TitleTooLong` when the trimmed title exceeds `MAX_TITLE_CHARS`.
    ///
    /// Surrounding whitespace does not count towards the limit.
    pub fn parse(raw: &str) -> TaskResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        let chars = trimmed.chars().count();
        if chars > MAX_TITLE_CHARS {
            return Err(TaskValidationError::TitleTooLong {
                chars,
                max: MAX_TITLE_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for TaskTitle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TaskValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Canonical task record owned by the store.
///
/// Readers only ever receive clones of this record, so mutating a returned
/// value never reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identity, immutable after creation.
    pub id: TaskId,
    pub title: TaskTitle,
    /// Absent when the task has no description.
    #[serde(default, deserialize_with = "deserialize_description")]
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
}

fn deserialize_description<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(normalize_description))
}

impl Task {
    pub(crate) fn from_new(id: TaskId, new_task: NewTask) -> Self {
        Self {
            id,
            title: new_task.title,
            description: new_task.description,
            priority: new_task.priority,
            status: new_task.status,
        }
    }

    /// Merges the supplied patch fields, leaving unspecified fields untouched.
    pub(crate) fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description.as_deref().and_then(normalize_description);
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Raw caller-side task input, as collected by a form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskInput {
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    /// Caller-supplied initial status, normally `todo`.
    pub status: TaskStatus,
}

impl TaskInput {
    /// Creates input with the given title and form defaults
    /// (`medium` priority, `todo` status, no description).
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Validates and normalizes this input into a store-ready value.
    pub fn validate(self) -> TaskResult<NewTask> {
        Ok(NewTask {
            title: TaskTitle::parse(self.title.as_str())?,
            description: self.description.as_deref().and_then(normalize_description),
            priority: self.priority,
            status: self.status,
        })
    }
}

/// Validated task fields awaiting an id from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: Option<String>,
    priority: TaskPriority,
    status: TaskStatus,
}

impl NewTask {
    pub fn title(&self) -> &TaskTitle {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn priority(&self) -> TaskPriority {
        self.priority
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }
}

/// Partial update for one task.
///
/// Every `None` field is left untouched. For `description`, `Some(None)`
/// clears the description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskPatch {
    pub title: Option<TaskTitle>,
    pub description: Option<Option<String>>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets or clears the description. Blank text clears it.
    pub fn description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = Some(description.map(Into::into));
        self
    }

    pub fn priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns whether this patch carries no fields.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }
}

/// Trims a description; blank text means "no description".
pub fn normalize_description(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        normalize_description, TaskFieldParseError, TaskInput, TaskPatch, TaskPriority,
        TaskStatus, TaskTitle, TaskValidationError, MAX_TITLE_CHARS,
    };

    #[test]
    fn title_is_trimmed() {
        let title = TaskTitle::parse("  ship it \n").expect("title should parse");
        assert_eq!(title.as_str(), "ship it");
    }

    #[test]
    fn title_rejects_blank() {
        assert_eq!(TaskTitle::parse(""), Err(TaskValidationError::EmptyTitle));
        assert_eq!(
            TaskTitle::parse(" \t "),
            Err(TaskValidationError::EmptyTitle)
        );
    }

    #[test]
    fn title_limit_applies_after_trimming() {
        let padded = format!("  {}  ", "x".repeat(MAX_TITLE_CHARS - 1));
        let title = TaskTitle::parse(&padded).expect("padding is not counted");
        assert_eq!(title.as_str(), "x".repeat(MAX_TITLE_CHARS - 1));

        let padded = format!("\t{}\n", "x".repeat(MAX_TITLE_CHARS));
        let title = TaskTitle::parse(&padded).expect("limit is inclusive");
        assert_eq!(title.as_str().chars().count(), MAX_TITLE_CHARS);

        let padded = format!(" {} ", "x".repeat(MAX_TITLE_CHARS + 1));
        assert_eq!(
            TaskTitle::parse(&padded),
            Err(TaskValidationError::TitleTooLong {
                chars: MAX_TITLE_CHARS + 1,
                max: MAX_TITLE_CHARS
            })
        );
    }

    #[test]
    fn title_length_counts_chars_not_bytes() {
        let exact = "é".repeat(MAX_TITLE_CHARS);
        assert!(TaskTitle::parse(&exact).is_ok());

        let err = TaskTitle::parse(&"x".repeat(MAX_TITLE_CHARS + 1)).unwrap_err();
        assert_eq!(
            err,
            TaskValidationError::TitleTooLong {
                chars: 101,
                max: 100
            }
        );
    }

    #[test]
    fn status_cycles_through_lifecycle() {
        assert_eq!(TaskStatus::Todo.next(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::InProgress.next(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.next(), TaskStatus::Todo);
    }

    #[test]
    fn enum_strings_parse_back() {
        for status in TaskStatus::ALL {
            assert_eq!(status.as_str().parse::<TaskStatus>(), Ok(status));
        }
        for priority in TaskPriority::ALL {
            assert_eq!(priority.as_str().parse::<TaskPriority>(), Ok(priority));
        }
    }

    #[test]
    fn enum_parse_rejects_unknown_values() {
        assert_eq!(
            "in_progress".parse::<TaskStatus>(),
            Err(TaskFieldParseError::UnknownStatus("in_progress".to_string()))
        );
        assert_eq!(
            "HIGH".parse::<TaskPriority>(),
            Err(TaskFieldParseError::UnknownPriority("HIGH".to_string()))
        );
    }

    #[test]
    fn input_defaults_match_form_defaults() {
        let new_task = TaskInput::new("A").validate().expect("valid input");
        assert_eq!(new_task.priority(), TaskPriority::Medium);
        assert_eq!(new_task.status(), TaskStatus::Todo);
        assert_eq!(new_task.description(), None);
    }

    #[test]
    fn input_blank_description_becomes_absent() {
        let new_task = TaskInput::new("A")
            .with_description("   ")
            .validate()
            .expect("valid input");
        assert_eq!(new_task.description(), None);
        assert_eq!(normalize_description(" notes "), Some("notes".to_string()));
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(TaskPatch::new().is_empty());
        assert!(!TaskPatch::new().priority(TaskPriority::High).is_empty());
        assert!(!TaskPatch::new().description(None::<String>).is_empty());
    }
}

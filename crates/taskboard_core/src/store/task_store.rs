//! Task store and read snapshots.
//!
//! # Responsibility
//! - Assign identity to new tasks and append them in order.
//! - Apply partial patches and permanent deletes by id.
//! - Produce immutable snapshots for read-side collaborators.
//!
//! # Invariants
//! - Store operations cannot fail once input is validated; `NewTask` and
//!   `TaskPatch` only carry validated titles.
//! - `revision` increases on every applied mutation and never otherwise.
//! - Id uniqueness comes from the generator; the store keeps no record of
//!   ids beyond the live collection.

use crate::filter::TaskFilter;
use crate::model::task::{NewTask, Task, TaskPatch};
use crate::model::task_id::{RandomTaskIdGenerator, TaskId, TaskIdGenerator};

/// Exclusive owner of the ordered task collection.
#[derive(Debug)]
pub struct TaskStore<G: TaskIdGenerator = RandomTaskIdGenerator> {
    tasks: Vec<Task>,
    ids: G,
    revision: u64,
}

impl TaskStore<RandomTaskIdGenerator> {
    /// Creates an empty store issuing random v4 ids.
    pub fn new() -> Self {
        Self::with_generator(RandomTaskIdGenerator)
    }
}

impl Default for TaskStore<RandomTaskIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: TaskIdGenerator> TaskStore<G> {
    /// Creates an empty store using the provided id generator.
    pub fn with_generator(ids: G) -> Self {
        Self {
            tasks: Vec::new(),
            ids,
            revision: 0,
        }
    }

    /// Appends a new task and returns its freshly assigned id.
    pub fn add_task(&mut self, new_task: NewTask) -> TaskId {
        let id = self.ids.next_id();
        self.tasks.push(Task::from_new(id, new_task));
        self.revision += 1;
        id
    }

    /// Merges `patch` into the task with `id`.
    ///
    /// Returns `false` without touching anything when no task has `id`.
    /// Position in the collection never changes.
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.apply_patch(patch);
        self.revision += 1;
        true
    }

    /// Permanently removes the task with `id`.
    ///
    /// Returns `false` without touching anything when no task has `id`.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            return false;
        };
        self.tasks.remove(index);
        self.revision += 1;
        true
    }

    /// Returns an owned snapshot of the collection in insertion order.
    pub fn list_tasks(&self) -> TaskSnapshot {
        TaskSnapshot {
            revision: self.revision,
            tasks: self.tasks.clone(),
        }
    }

    /// Returns a copy of one task.
    pub fn get_task(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Count of applied mutations since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Immutable point-in-time copy of the task collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskSnapshot {
    revision: u64,
    tasks: Vec<Task>,
}

impl TaskSnapshot {
    /// Store revision this snapshot was taken at.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks matching `filter`, in insertion order.
    pub fn filtered(&self, filter: &TaskFilter) -> Vec<&Task> {
        filter.apply(&self.tasks)
    }

    /// Consumes the snapshot into its task list.
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}

impl<'a> IntoIterator for &'a TaskSnapshot {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

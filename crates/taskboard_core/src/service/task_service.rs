//! Task access boundary.
//!
//! # Responsibility
//! - Define the capability set `{list, add, update, delete}` plus change
//!   subscription that presentation code is allowed to call.
//! - Validate raw input before it reaches the store.
//! - Notify subscribers after every applied mutation.
//!
//! # Invariants
//! - Rejected input never mutates the store and never notifies.
//! - Unknown ids on update/delete are silent no-ops (logged at debug).
//! - Logs carry ids and counts only, never titles or descriptions.

use crate::model::task::{TaskInput, TaskPatch, TaskResult, TaskStatus};
use crate::model::task_id::{RandomTaskIdGenerator, TaskId, TaskIdGenerator};
use crate::store::task_store::{TaskSnapshot, TaskStore};
use log::{debug, info, warn};

/// Capability set handed to presentation collaborators.
pub trait TaskAccess {
    /// Returns the current ordered collection.
    fn list_tasks(&self) -> TaskSnapshot;

    /// Validates and appends a task.
    ///
    /// # Errors
    /// Returns the validation failure; the collection is left unchanged.
    fn add_task(&mut self, input: TaskInput) -> TaskResult<TaskId>;

    /// Merges `patch` into the task with `id`. Returns whether it matched.
    fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> bool;

    /// Removes the task with `id`. Returns whether it matched.
    fn delete_task(&mut self, id: TaskId) -> bool;

    /// Registers a listener called with a fresh snapshot after each
    /// applied mutation.
    fn subscribe(&mut self, listener: Listener) -> SubscriptionId;

    /// Removes a listener. Returns whether it was registered.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    /// Advances the status `todo -> in-progress -> done -> todo`.
    ///
    /// Returns the new status, or `None` when `id` is unknown.
    fn cycle_status(&mut self, id: TaskId) -> Option<TaskStatus> {
        let current = self.list_tasks().get(id)?.status;
        let next = current.next();
        self.update_task(id, TaskPatch::new().status(next))
            .then_some(next)
    }
}

/// Handle returned by [`TaskAccess::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Change listener registered through [`TaskAccess::subscribe`].
pub type Listener = Box<dyn FnMut(&TaskSnapshot)>;

/// Task service over an owned store.
pub struct TaskService<G: TaskIdGenerator = RandomTaskIdGenerator> {
    store: TaskStore<G>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl TaskService<RandomTaskIdGenerator> {
    /// Creates a service over an empty store with random ids.
    pub fn new() -> Self {
        Self::with_store(TaskStore::new())
    }
}

impl Default for TaskService<RandomTaskIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: TaskIdGenerator> TaskService<G> {
    /// Creates a service that takes ownership of `store`.
    pub fn with_store(store: TaskStore<G>) -> Self {
        Self {
            store,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Number of tasks currently stored.
    pub fn task_count(&self) -> usize {
        self.store.len()
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.store.list_tasks();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

impl<G: TaskIdGenerator> TaskAccess for TaskService<G> {
    fn list_tasks(&self) -> TaskSnapshot {
        self.store.list_tasks()
    }

    fn add_task(&mut self, input: TaskInput) -> TaskResult<TaskId> {
        let new_task = match input.validate() {
            Ok(new_task) => new_task,
            Err(err) => {
                warn!("event=task_add module=service status=rejected reason=\"{err}\"");
                return Err(err);
            }
        };

        let priority = new_task.priority();
        let id = self.store.add_task(new_task);
        info!(
            "event=task_add module=service status=ok task_id={id} priority={priority} count={}",
            self.store.len()
        );
        self.notify();
        Ok(id)
    }

    fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> bool {
        let status = patch.status;
        if !self.store.update_task(id, patch) {
            debug!("event=task_update module=service status=noop task_id={id}");
            return false;
        }

        match status {
            Some(status) => info!(
                "event=task_update module=service status=ok task_id={id} task_status={status}"
            ),
            None => info!("event=task_update module=service status=ok task_id={id}"),
        }
        self.notify();
        true
    }

    fn delete_task(&mut self, id: TaskId) -> bool {
        if !self.store.delete_task(id) {
            debug!("event=task_delete module=service status=noop task_id={id}");
            return false;
        }

        info!(
            "event=task_delete module=service status=ok task_id={id} count={}",
            self.store.len()
        );
        self.notify();
        true
    }

    fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        debug!(
            "event=task_subscribe module=service status=ok listeners={}",
            self.listeners.len()
        );
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        before != self.listeners.len()
    }
}

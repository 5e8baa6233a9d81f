//! In-memory task store.

use crate::tasks::models::{Task, TaskFields};
use chrono::Utc;
use parking_lot::Mutex;

/// Error when a referenced task is not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskNotFound(pub u64);

impl std::fmt::Display for TaskNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "task not found: {}", self.0)
    }
}

impl std::error::Error for TaskNotFound {}

/// Process-wide task state, guarded by a single coarse lock.
#[derive(Debug)]
struct Inner {
    /// All tasks, in insertion order.
    tasks: Vec<Task>,
    /// Next ID to assign. Always greater than every existing task ID.
    next_id: u64,
}

/// In-memory store of tasks.
///
/// The store is the single source of truth for task data and enforces the
/// completion-timestamp invariant: `completed_at` is `Some` if and only if
/// `completed` is true. One store is constructed at startup and shared
/// (behind an `Arc`) with every request handler; every operation takes the
/// internal lock for its full duration, so mutations are immediately visible
/// to subsequent calls.
#[derive(Debug)]
pub struct TaskStore {
    inner: Mutex<Inner>,
}

impl TaskStore {
    /// Create a store pre-populated with the given tasks.
    ///
    /// The next-ID counter starts one above the highest seed ID (or at 1 for
    /// an empty seed). Seed tasks are trusted to have unique IDs and to
    /// satisfy the completion-timestamp invariant.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { inner: Mutex::new(Inner { tasks, next_id }) }
    }

    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// All tasks, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Task> {
        self.inner.lock().tasks.clone()
    }

    /// Create a task from the given fields and return the stored copy.
    ///
    /// The store assigns the ID and `created_at`; the task always starts
    /// uncompleted regardless of what the caller submitted.
    pub fn create(&self, fields: TaskFields) -> Task {
        let mut inner = self.inner.lock();
        let task = Task {
            id: inner.next_id,
            title: fields.title,
            kind: fields.kind,
            owner: fields.owner,
            priority: fields.priority,
            completed: false,
            notes: fields.notes,
            created_at: Utc::now(),
            completed_at: None,
        };
        inner.next_id += 1;
        inner.tasks.push(task.clone());
        task
    }

    /// Replace the task with the given ID, keeping its `id`, `created_at`,
    /// and position in the sequence.
    ///
    /// `completed_at` follows the transition rule: newly completed tasks get
    /// the current time, tasks still completed keep their existing timestamp,
    /// and uncompleted tasks have it cleared.
    ///
    /// # Errors
    ///
    /// Returns [`TaskNotFound`] if no task has the given ID; the store is
    /// unchanged in that case.
    pub fn replace(&self, id: u64, fields: TaskFields) -> Result<Task, TaskNotFound> {
        let mut inner = self.inner.lock();
        let slot = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskNotFound(id))?;

        let completed_at = match (slot.completed, fields.completed) {
            (false, true) => Some(Utc::now()),
            (true, true) => slot.completed_at,
            (_, false) => None,
        };

        *slot = Task {
            id,
            title: fields.title,
            kind: fields.kind,
            owner: fields.owner,
            priority: fields.priority,
            completed: fields.completed,
            notes: fields.notes,
            created_at: slot.created_at,
            completed_at,
        };
        Ok(slot.clone())
    }

    /// Flip the completion state of the task with the given ID.
    ///
    /// Completing sets `completed_at` to the current time; uncompleting
    /// clears it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskNotFound`] if no task has the given ID.
    pub fn toggle(&self, id: u64) -> Result<Task, TaskNotFound> {
        let mut inner = self.inner.lock();
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskNotFound(id))?;

        task.completed = !task.completed;
        task.completed_at = if task.completed { Some(Utc::now()) } else { None };
        Ok(task.clone())
    }

    /// Remove the task with the given ID, preserving the relative order of
    /// the remaining tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskNotFound`] if no task has the given ID.
    pub fn delete(&self, id: u64) -> Result<(), TaskNotFound> {
        let mut inner = self.inner.lock();
        let index = inner
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskNotFound(id))?;
        inner.tasks.remove(index);
        Ok(())
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

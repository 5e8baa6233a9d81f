//! Task data model and in-memory store.
//!
//! Tasks live in a single ordered list with a monotonically increasing ID
//! counter. All state is process-local and discarded on exit.
//!
//! # Example
//!
//! ```
//! use taskboard::tasks::{TaskFields, TaskStore};
//!
//! let store = TaskStore::new();
//! let task = store.create(TaskFields {
//!     title: "Fix login bug".to_string(),
//!     priority: "High".to_string(),
//!     ..TaskFields::default()
//! });
//! assert_eq!(task.id, 1);
//!
//! let done = store.toggle(task.id).unwrap();
//! assert!(done.completed && done.completed_at.is_some());
//! ```

pub mod models;
pub mod seed;
pub mod store;

pub use models::{Task, TaskFields};
pub use seed::seed_tasks;
pub use store::{TaskNotFound, TaskStore};

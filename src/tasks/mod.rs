//! Task List
//!
//! The dashboard's in-memory task list:
//!
//! - **types**: `Task` and `TaskId`
//! - **store**: `TaskStore`, the ordered list with a tracked completed count
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use taskpulse::tasks::{TaskError, TaskStore};
//!
//! let mut store = TaskStore::new();
//! let task = store.add("Buy milk").unwrap();
//!
//! store.toggle(task.id).unwrap();
//! assert_eq!(store.completed_count(), 1);
//!
//! store.remove(task.id).unwrap();
//! assert!(matches!(store.remove(task.id), Err(TaskError::NotFound(_))));
//! ```

pub mod error;
pub mod store;
pub mod types;

pub use error::{TaskError, TaskResult};
pub use store::TaskStore;
pub use types::{Task, TaskId};

//! Core task types
//!
//! - `TaskId`: Opaque, monotonic identifier assigned by the store
//! - `Task`: A single to-do entry shown in the dashboard list

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a task
///
/// Ids are handed out by [`TaskStore`](super::TaskStore) in increasing order
/// and are never reused, even after the task is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("#{}", self.0))
    }
}

impl std::str::FromStr for TaskId {
    type Err = std::num::ParseIntError;

    /// Accepts both `7` and `#7`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(TaskId)
    }
}

/// A single task in the dashboard list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, immutable for the task's lifetime
    pub id: TaskId,
    /// Trimmed, non-empty description
    pub text: String,
    /// Whether the task has been marked done
    pub completed: bool,
    /// When the task was added (informational)
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub(crate) fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Label for the task's toggle action
    pub fn action_label(&self) -> &'static str {
        if self.completed {
            "Undo"
        } else {
            "Complete"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_parse() {
        assert_eq!("7".parse::<TaskId>().unwrap(), TaskId::new(7));
        assert_eq!(" #12 ".parse::<TaskId>().unwrap(), TaskId::new(12));
        assert!("abc".parse::<TaskId>().is_err());
    }

    #[test]
    fn test_task_serializes_id_as_number() {
        let task = Task::new(TaskId::new(3), "Write report");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["text"], "Write report");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn test_action_label() {
        let mut task = Task::new(TaskId::new(1), "x");
        assert_eq!(task.action_label(), "Complete");
        task.completed = true;
        assert_eq!(task.action_label(), "Undo");
    }
}

//! Presentation boundary
//!
//! The controller never touches a concrete UI. Everything it needs from the
//! screen goes through [`Renderer`], so a browser page, a terminal and a test
//! recorder can all host the same dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::notify::{Notification, NotificationId};
use crate::tasks::{Task, TaskId};

/// Numeric counters shown in the stats row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterSlot {
    CompletedTasks,
    HoursWorked,
    ActiveProjects,
}

impl CounterSlot {
    pub fn all() -> &'static [CounterSlot] {
        &[
            CounterSlot::CompletedTasks,
            CounterSlot::HoursWorked,
            CounterSlot::ActiveProjects,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CounterSlot::CompletedTasks => "Completed Tasks",
            CounterSlot::HoursWorked => "Hours Worked",
            CounterSlot::ActiveProjects => "Active Projects",
        }
    }
}

impl fmt::Display for CounterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User actions forwarded by the presentation layer
///
/// Task entries emit `Toggle` / `Delete` with their own id; the input form
/// emits `Submit` (text read back through [`Renderer::input_text`]) or
/// `AddTask` when the host already holds the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Submit,
    AddTask(String),
    Toggle(TaskId),
    Delete(TaskId),
}

/// Screen capabilities the dashboard controller relies on
pub trait Renderer {
    /// Current contents of the new-task input
    fn input_text(&self) -> String;

    fn clear_input(&mut self);

    /// Write the formatted clock into the time slot
    fn set_time(&mut self, text: &str);

    /// Write a value into one of the counter slots
    fn set_counter(&mut self, slot: CounterSlot, value: i64);

    /// Append a list entry for `task`
    fn insert_task(&mut self, task: &Task);

    /// Refresh the entry for `task` (completed styling, action label)
    fn update_task(&mut self, task: &Task);

    fn remove_task(&mut self, id: TaskId);

    /// Insert a toast and start its enter transition
    fn show_notification(&mut self, notification: &Notification);

    fn notification_entered(&mut self, id: NotificationId);

    /// Start the exit transition of a toast
    fn notification_leaving(&mut self, id: NotificationId);

    fn remove_notification(&mut self, id: NotificationId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_labels() {
        assert_eq!(CounterSlot::all().len(), 3);
        assert_eq!(CounterSlot::HoursWorked.to_string(), "Hours Worked");
        assert_eq!(
            serde_json::to_string(&CounterSlot::CompletedTasks).unwrap(),
            "\"completed_tasks\""
        );
    }
}

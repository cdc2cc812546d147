//! Line-oriented renderer for hosting the dashboard in a terminal
//!
//! List changes and toasts are printed as they happen. The clock and the
//! counters update silently and show up when the board is printed. There is
//! no input widget: the CLI sends task text with `UiEvent::AddTask`.

use std::io::{self, Stdout, Write};

use crate::dashboard::{CounterSlot, DashboardSnapshot, Renderer};
use crate::notify::{Notification, NotificationId};
use crate::tasks::{Task, TaskId};

pub struct TerminalRenderer<W: Write = Stdout> {
    out: W,
    time: String,
    counters: [i64; 3],
}

impl TerminalRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            time: String::new(),
            counters: [0; 3],
        }
    }

    /// Last rendered clock text
    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn counter(&self, slot: CounterSlot) -> i64 {
        self.counters[slot_index(slot)]
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

/// Print the full board for a snapshot
pub fn write_board<W: Write>(out: &mut W, time: &str, snapshot: &DashboardSnapshot) -> io::Result<()> {
    writeln!(out, "{}", time)?;
    for counter in &snapshot.counters {
        writeln!(out, "  {:<16} {}", counter.slot.label(), counter.value)?;
    }
    writeln!(out)?;

    if snapshot.tasks.is_empty() {
        writeln!(out, "  No tasks")?;
    }
    for task in &snapshot.tasks {
        writeln!(out, "  {} {:>4} {}", checkbox(task), task.id, task.text)?;
    }
    out.flush()
}

fn checkbox(task: &Task) -> &'static str {
    if task.completed {
        "[x]"
    } else {
        "[ ]"
    }
}

fn slot_index(slot: CounterSlot) -> usize {
    match slot {
        CounterSlot::CompletedTasks => 0,
        CounterSlot::HoursWorked => 1,
        CounterSlot::ActiveProjects => 2,
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn input_text(&self) -> String {
        String::new()
    }

    fn clear_input(&mut self) {}

    fn set_time(&mut self, text: &str) {
        self.time = text.to_string();
    }

    fn set_counter(&mut self, slot: CounterSlot, value: i64) {
        self.counters[slot_index(slot)] = value;
    }

    fn insert_task(&mut self, task: &Task) {
        self.line(format_args!("  + {} {} {}", checkbox(task), task.id, task.text));
    }

    fn update_task(&mut self, task: &Task) {
        self.line(format_args!("  ~ {} {} {}", checkbox(task), task.id, task.text));
    }

    fn remove_task(&mut self, id: TaskId) {
        self.line(format_args!("  - {}", id));
    }

    fn show_notification(&mut self, notification: &Notification) {
        self.line(format_args!(
            "{} {}",
            notification.severity.icon(),
            notification.message
        ));
    }

    fn notification_entered(&mut self, _id: NotificationId) {}

    fn notification_leaving(&mut self, _id: NotificationId) {}

    fn remove_notification(&mut self, id: NotificationId) {
        tracing::trace!(notification_id = %id, "Toast dismissed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dashboard::{DashboardController, UiEvent};

    fn output(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_prints_list_changes_and_toasts() {
        let mut config = Config::default();
        config.dashboard.sample_tasks.clear();
        let mut controller = DashboardController::new(TerminalRenderer::new(Vec::new()), &config);

        controller.dispatch(UiEvent::AddTask("Buy milk".to_string()));
        let id = controller.tasks()[0].id;
        controller.dispatch(UiEvent::Toggle(id));
        controller.dispatch(UiEvent::Delete(id));

        // Submitting reads the (always empty) input and is rejected
        controller.dispatch(UiEvent::Submit);
        assert!(controller.tasks().is_empty());

        let text = output(controller.into_renderer());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "  + [ ] #1 Buy milk",
                "✓ Task added successfully!",
                "✓ Task completed! 🎉",
                "  ~ [x] #1 Buy milk",
                "  - #1",
                "ℹ Task deleted",
                "✕ Please enter a task!",
            ]
        );
    }

    #[test]
    fn test_counters_and_time_are_silent() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.set_time("Sunday");
        renderer.set_counter(CounterSlot::HoursWorked, 4);

        assert_eq!(renderer.time(), "Sunday");
        assert_eq!(renderer.counter(CounterSlot::HoursWorked), 4);
        assert_eq!(renderer.counter(CounterSlot::ActiveProjects), 0);
        assert!(output(renderer).is_empty());
    }

    #[test]
    fn test_write_board() {
        let mut config = Config::default();
        config.animation.steps = 1;
        let mut controller = DashboardController::new(TerminalRenderer::new(Vec::new()), &config);
        let now = chrono::Utc::now();
        controller.start(&now);
        let first = controller.tasks()[0].id;
        controller.toggle_task(first);
        controller.on_frame(now.timestamp_millis());

        let mut out = Vec::new();
        write_board(&mut out, "Now", &controller.snapshot()).unwrap();
        let board = String::from_utf8(out).unwrap();

        assert!(board.starts_with("Now\n"));
        assert!(board.contains("Completed Tasks  1"));
        assert!(board.contains("Active Projects  3"));
        assert!(board.contains("[x]   #1 Review project proposal"));
        assert!(board.contains("[ ]   #2 Update team documentation"));
    }
}

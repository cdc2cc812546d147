//! Dashboard Controller
//!
//! Owns the task store, the counter animator and the notification queue, and
//! turns user actions and timer ticks into [`Renderer`] calls. The controller
//! holds no timers of its own: a driver (the tokio runtime or the browser
//! frontend) calls the `tick_*` / `on_frame` methods on its schedule.

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::Display;

use super::renderer::{CounterSlot, Renderer, UiEvent};
use crate::animation::Animator;
use crate::clock::format_time;
use crate::config::{Config, DashboardConfig, ProgressConfig};
use crate::notify::{NotificationEvent, NotificationQueue, Severity};
use crate::tasks::{Task, TaskError, TaskId, TaskStore};

pub const MSG_EMPTY_TASK: &str = "Please enter a task!";
pub const MSG_TASK_ADDED: &str = "Task added successfully!";
pub const MSG_TASK_COMPLETED: &str = "Task completed! 🎉";
pub const MSG_TASK_DELETED: &str = "Task deleted";

/// Point-in-time view of the dashboard, for hosts that render on demand
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub tasks: Vec<Task>,
    pub completed_count: usize,
    pub hours_worked: f64,
    pub active_projects: u32,
    /// Values currently shown in each counter slot
    pub counters: Vec<CounterValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterValue {
    pub slot: CounterSlot,
    pub value: i64,
}

/// Reactive shell around the dashboard state
pub struct DashboardController<R> {
    renderer: R,
    store: TaskStore,
    animator: Animator<CounterSlot>,
    notifications: NotificationQueue,
    dashboard: DashboardConfig,
    progress: ProgressConfig,
    /// Hours worked, in tenths of an hour
    hours_tenths: u32,
    /// Latest driver time seen, used to stamp notifications
    now_ms: i64,
}

impl<R: Renderer> DashboardController<R> {
    /// Create a controller with an empty task list
    pub fn new(renderer: R, config: &Config) -> Self {
        Self {
            renderer,
            store: TaskStore::new(),
            animator: Animator::new(config.animation),
            notifications: NotificationQueue::new(config.notifications),
            dashboard: config.dashboard.clone(),
            progress: config.progress,
            hours_tenths: 0,
            now_ms: 0,
        }
    }

    /// Render the initial screen: clock, sample tasks and counters
    pub fn start<Tz>(&mut self, now: &DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.tick_clock(now);

        let seeded = self.store.seed(&self.dashboard.sample_tasks);
        for task in &seeded {
            self.renderer.insert_task(task);
        }

        self.update_stats();

        tracing::info!(
            sample_tasks = seeded.len(),
            active_projects = self.dashboard.active_projects,
            "Dashboard started"
        );
    }

    /// Route a user action
    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::Submit => {
                self.submit_task();
            }
            UiEvent::AddTask(text) => {
                self.add_task(&text);
            }
            UiEvent::Toggle(id) => {
                self.toggle_task(id);
            }
            UiEvent::Delete(id) => {
                self.delete_task(id);
            }
        }
    }

    /// Add a task from the renderer's input, clearing it on success
    pub fn submit_task(&mut self) -> Option<Task> {
        let text = self.renderer.input_text();
        let task = self.add_task(&text)?;
        self.renderer.clear_input();
        Some(task)
    }

    /// Add a task; blank text is reported to the user and changes nothing
    pub fn add_task(&mut self, text: &str) -> Option<Task> {
        match self.store.add(text) {
            Ok(task) => {
                self.renderer.insert_task(&task);
                self.notify(MSG_TASK_ADDED, Severity::Success);
                Some(task)
            }
            Err(e) => {
                tracing::debug!("Rejected task input: {}", e);
                self.notify(MSG_EMPTY_TASK, Severity::Error);
                None
            }
        }
    }

    /// Flip a task between done and not done
    ///
    /// Unknown ids are ignored.
    pub fn toggle_task(&mut self, id: TaskId) -> Option<Task> {
        let task = self.store.toggle(id).map_err(log_missing).ok()?;

        if task.completed {
            self.notify(MSG_TASK_COMPLETED, Severity::Success);
        }

        self.update_stats();
        self.renderer.update_task(&task);
        Some(task)
    }

    /// Delete a task
    ///
    /// Unknown ids are ignored.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let task = self.store.remove(id).map_err(log_missing).ok()?;

        self.update_stats();
        self.renderer.remove_task(id);
        self.notify(MSG_TASK_DELETED, Severity::Info);
        Some(task)
    }

    /// Refresh the header clock
    pub fn tick_clock<Tz>(&mut self, now: &DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.observe_time(now.timestamp_millis());
        let text = format_time(now, &self.dashboard.clock_format);
        self.renderer.set_time(&text);
    }

    /// Roll the simulated progress
    ///
    /// `roll` is a uniform sample from `[0, 1)`; progress is made when it
    /// lands strictly above `1 - probability`. Returns whether the
    /// hours counter moved.
    pub fn tick_progress(&mut self, roll: f64) -> bool {
        if self.progress.probability <= 0.0 || roll <= 1.0 - self.progress.probability {
            return false;
        }

        self.hours_tenths = self
            .hours_tenths
            .saturating_add(self.progress.increment_tenths);
        tracing::debug!(hours = self.hours_worked(), "Progress logged");

        self.update_stats();
        true
    }

    /// Advance animations and notification lifecycles by one frame
    pub fn on_frame(&mut self, now_ms: i64) {
        self.observe_time(now_ms);

        for (slot, value) in self.animator.step() {
            self.renderer.set_counter(slot, value);
        }

        for event in self.notifications.tick(self.now_ms) {
            match event {
                NotificationEvent::Entered(id) => self.renderer.notification_entered(id),
                NotificationEvent::Leaving(id) => self.renderer.notification_leaving(id),
                NotificationEvent::Removed(id) => self.renderer.remove_notification(id),
            }
        }
    }

    /// True when no animation or notification needs further frames
    pub fn is_idle(&self) -> bool {
        self.animator.is_idle() && self.notifications.is_idle()
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.list()
    }

    pub fn completed_count(&self) -> usize {
        self.store.completed_count()
    }

    pub fn hours_worked(&self) -> f64 {
        f64::from(self.hours_tenths) / 10.0
    }

    /// Value currently shown in a counter slot
    pub fn displayed(&self, slot: CounterSlot) -> i64 {
        self.animator.value(slot)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            tasks: self.store.list().to_vec(),
            completed_count: self.store.completed_count(),
            hours_worked: self.hours_worked(),
            active_projects: self.dashboard.active_projects,
            counters: CounterSlot::all()
                .iter()
                .map(|&slot| CounterValue {
                    slot,
                    value: self.animator.value(slot),
                })
                .collect(),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn update_stats(&mut self) {
        self.animate_counter(CounterSlot::CompletedTasks, self.store.completed_count() as i64);
        self.animate_counter(CounterSlot::HoursWorked, i64::from(self.hours_tenths / 10));
        self.animate_counter(
            CounterSlot::ActiveProjects,
            i64::from(self.dashboard.active_projects),
        );
    }

    /// Start a tween unless the slot is already showing or heading to `target`
    fn animate_counter(&mut self, slot: CounterSlot, target: i64) {
        let settled = match self.animator.target(slot) {
            Some(current) => current == target,
            // Never-animated slots still need one frame to show their value
            None => self.animator.contains(slot) && self.animator.value(slot) == target,
        };
        if !settled {
            self.animator.animate(slot, target);
        }
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        let notification = self.notifications.push(message, severity, self.now_ms);
        self.renderer.show_notification(&notification);
    }

    fn observe_time(&mut self, now_ms: i64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

fn log_missing(err: TaskError) -> TaskError {
    tracing::debug!("Ignoring task action: {}", err);
    err
}

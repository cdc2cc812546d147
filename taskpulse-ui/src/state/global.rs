//! Global Application State
//!
//! Reactive state management using Leptos signals. The dashboard controller
//! renders into [`DashboardSignals`] through [`SignalRenderer`]; components
//! read the signals and send user actions back as [`UiEvent`]s.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use taskpulse::{
    Config, CounterSlot, DashboardController, Notification, NotificationId, Renderer, Severity,
    Task, TaskId, UiEvent,
};

/// Signals the dashboard renders into
#[derive(Clone, Copy)]
pub struct DashboardSignals {
    /// Formatted header clock
    pub time: RwSignal<String>,
    pub completed_tasks: RwSignal<i64>,
    pub hours_worked: RwSignal<i64>,
    pub active_projects: RwSignal<i64>,
    /// Task list in display order
    pub tasks: RwSignal<Vec<Task>>,
    /// Visible toasts, oldest first
    pub toasts: RwSignal<Vec<ToastView>>,
    /// Contents of the new-task input
    pub input: RwSignal<String>,
}

impl DashboardSignals {
    pub fn new() -> Self {
        Self {
            time: create_rw_signal(String::new()),
            completed_tasks: create_rw_signal(0),
            hours_worked: create_rw_signal(0),
            active_projects: create_rw_signal(0),
            tasks: create_rw_signal(Vec::new()),
            toasts: create_rw_signal(Vec::new()),
            input: create_rw_signal(String::new()),
        }
    }

    pub fn counter(&self, slot: CounterSlot) -> RwSignal<i64> {
        match slot {
            CounterSlot::CompletedTasks => self.completed_tasks,
            CounterSlot::HoursWorked => self.hours_worked,
            CounterSlot::ActiveProjects => self.active_projects,
        }
    }
}

/// Transition phase of a toast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

/// A toast as the view sees it
#[derive(Clone, Debug, PartialEq)]
pub struct ToastView {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

/// [`Renderer`] over Leptos signals
pub struct SignalRenderer {
    signals: DashboardSignals,
}

impl SignalRenderer {
    pub fn new(signals: DashboardSignals) -> Self {
        Self { signals }
    }

    fn set_toast_phase(&self, id: NotificationId, phase: ToastPhase) {
        self.signals.toasts.update(|toasts| {
            if let Some(toast) = toasts.iter_mut().find(|t| t.id == id) {
                toast.phase = phase;
            }
        });
    }
}

impl Renderer for SignalRenderer {
    fn input_text(&self) -> String {
        self.signals.input.get_untracked()
    }

    fn clear_input(&mut self) {
        self.signals.input.set(String::new());
    }

    fn set_time(&mut self, text: &str) {
        self.signals.time.set(text.to_string());
    }

    fn set_counter(&mut self, slot: CounterSlot, value: i64) {
        self.signals.counter(slot).set(value);
    }

    fn insert_task(&mut self, task: &Task) {
        self.signals.tasks.update(|tasks| tasks.push(task.clone()));
    }

    fn update_task(&mut self, task: &Task) {
        self.signals.tasks.update(|tasks| {
            if let Some(entry) = tasks.iter_mut().find(|t| t.id == task.id) {
                *entry = task.clone();
            }
        });
    }

    fn remove_task(&mut self, id: TaskId) {
        self.signals.tasks.update(|tasks| tasks.retain(|t| t.id != id));
    }

    fn show_notification(&mut self, notification: &Notification) {
        let toast = ToastView {
            id: notification.id,
            message: notification.message.clone(),
            severity: notification.severity,
            phase: ToastPhase::Entering,
        };
        self.signals.toasts.update(|toasts| toasts.push(toast));
    }

    fn notification_entered(&mut self, id: NotificationId) {
        self.set_toast_phase(id, ToastPhase::Shown);
    }

    fn notification_leaving(&mut self, id: NotificationId) {
        self.set_toast_phase(id, ToastPhase::Leaving);
    }

    fn remove_notification(&mut self, id: NotificationId) {
        self.signals.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    pub signals: DashboardSignals,
    pub config: Rc<Config>,
    controller: Rc<RefCell<DashboardController<SignalRenderer>>>,
}

impl GlobalState {
    /// Forward a user action to the dashboard
    pub fn dispatch(&self, event: UiEvent) {
        self.with_controller(|controller| controller.dispatch(event));
    }

    /// Run `f` against the controller
    ///
    /// Re-entrant calls are dropped with a console warning instead of
    /// panicking on the `RefCell`.
    pub fn with_controller(&self, f: impl FnOnce(&mut DashboardController<SignalRenderer>)) {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => f(&mut controller),
            Err(_) => {
                web_sys::console::warn_1(&"Dashboard busy, dropping re-entrant update".into())
            }
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state(config: Config) -> GlobalState {
    let signals = DashboardSignals::new();
    let controller = DashboardController::new(SignalRenderer::new(signals), &config);

    let state = GlobalState {
        signals,
        config: Rc::new(config),
        controller: Rc::new(RefCell::new(controller)),
    };

    provide_context(state.clone());
    state
}

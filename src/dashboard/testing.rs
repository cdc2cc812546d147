//! Recording renderer for tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::renderer::{CounterSlot, Renderer};
use crate::notify::{Notification, NotificationId};
use crate::tasks::{Task, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    Entering,
    Visible,
    Leaving,
}

#[derive(Debug, Default)]
pub struct Recorded {
    pub input: String,
    pub time: Option<String>,
    pub counters: HashMap<CounterSlot, i64>,
    pub counter_history: Vec<(CounterSlot, i64)>,
    /// List entries in display order
    pub entries: Vec<Task>,
    /// Every notification ever shown, in order
    pub shown: Vec<Notification>,
    /// Toasts currently on screen
    pub toasts: Vec<(NotificationId, ToastState)>,
}

impl Recorded {
    pub fn messages(&self) -> Vec<&str> {
        self.shown.iter().map(|n| n.message.as_str()).collect()
    }

    pub fn counter(&self, slot: CounterSlot) -> i64 {
        self.counters.get(&slot).copied().unwrap_or(0)
    }
}

/// Renderer that records every call; clones share the same record
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MutexGuard<'_, Recorded> {
        self.inner.lock().unwrap()
    }

    pub fn type_input(&self, text: &str) {
        self.state().input = text.to_string();
    }
}

impl Renderer for RecordingRenderer {
    fn input_text(&self) -> String {
        self.state().input.clone()
    }

    fn clear_input(&mut self) {
        self.state().input.clear();
    }

    fn set_time(&mut self, text: &str) {
        self.state().time = Some(text.to_string());
    }

    fn set_counter(&mut self, slot: CounterSlot, value: i64) {
        let mut state = self.state();
        state.counters.insert(slot, value);
        state.counter_history.push((slot, value));
    }

    fn insert_task(&mut self, task: &Task) {
        self.state().entries.push(task.clone());
    }

    fn update_task(&mut self, task: &Task) {
        let mut state = self.state();
        if let Some(entry) = state.entries.iter_mut().find(|t| t.id == task.id) {
            *entry = task.clone();
        }
    }

    fn remove_task(&mut self, id: TaskId) {
        self.state().entries.retain(|t| t.id != id);
    }

    fn show_notification(&mut self, notification: &Notification) {
        let mut state = self.state();
        state.shown.push(notification.clone());
        state.toasts.push((notification.id, ToastState::Entering));
    }

    fn notification_entered(&mut self, id: NotificationId) {
        set_toast(&mut self.state(), id, ToastState::Visible);
    }

    fn notification_leaving(&mut self, id: NotificationId) {
        set_toast(&mut self.state(), id, ToastState::Leaving);
    }

    fn remove_notification(&mut self, id: NotificationId) {
        self.state().toasts.retain(|(toast, _)| *toast != id);
    }
}

fn set_toast(state: &mut Recorded, id: NotificationId, to: ToastState) {
    if let Some((_, toast)) = state.toasts.iter_mut().find(|(toast, _)| *toast == id) {
        *toast = to;
    }
}

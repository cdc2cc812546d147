//! Dashboard
//!
//! - **renderer**: the `Renderer` capability trait, counter slots and UI events
//! - **controller**: `DashboardController`, wiring tasks, counters and toasts
//!   to a renderer
//!
//! # Architecture
//!
//! ```text
//! UiEvent ──▶ DashboardController ──▶ TaskStore
//!                    │
//!                    ├──▶ Animator (one tween per CounterSlot)
//!                    ├──▶ NotificationQueue
//!                    ▼
//!                 Renderer  (browser signals / terminal / tests)
//! ```

pub mod controller;
pub mod renderer;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{
    CounterValue, DashboardController, DashboardSnapshot, MSG_EMPTY_TASK, MSG_TASK_ADDED,
    MSG_TASK_COMPLETED, MSG_TASK_DELETED,
};
pub use renderer::{CounterSlot, Renderer, UiEvent};

//! # Taskpulse
//!
//! A personal productivity dashboard: live clock, animated statistic
//! counters, an in-memory task list and auto-dismissing toasts.
//!
//! ## Modules
//!
//! - [`tasks`]: Task list state (`TaskStore`)
//! - [`animation`]: Counter tweens with cancel-on-restart per slot
//! - [`notify`]: Toast notification lifecycle
//! - [`clock`]: Header clock formatting
//! - [`dashboard`]: `DashboardController` and the `Renderer` boundary
//! - [`config`]: TOML + environment configuration
//! - `runtime` (feature `runtime`): tokio host and terminal renderer
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use taskpulse::{Config, DashboardRuntime, TerminalRenderer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let (handle, join) = DashboardRuntime::spawn(TerminalRenderer::stdout(), &config);
//!
//!     handle.add_task("Buy milk").await?;
//!     let snapshot = handle.snapshot().await?;
//!     println!("{} tasks", snapshot.tasks.len());
//!
//!     handle.shutdown().await?;
//!     join.await?;
//!     Ok(())
//! }
//! ```

pub mod animation;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod notify;
#[cfg(feature = "runtime")]
pub mod runtime;
pub mod tasks;

// Re-export top-level types for convenience
pub use animation::{Animator, Tween, TweenConfig};

pub use config::{Config, ConfigError, DashboardConfig, LoggingConfig, ProgressConfig};

pub use dashboard::{
    CounterSlot, CounterValue, DashboardController, DashboardSnapshot, Renderer, UiEvent,
};

pub use notify::{
    Notification, NotificationConfig, NotificationEvent, NotificationId, NotificationQueue,
    Severity,
};

pub use tasks::{Task, TaskError, TaskId, TaskResult, TaskStore};

#[cfg(feature = "runtime")]
pub use runtime::{DashboardHandle, DashboardRuntime, RuntimeError, TerminalRenderer};

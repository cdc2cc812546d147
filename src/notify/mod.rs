//! Toast Notifications
//!
//! Fire-and-forget messages with a fixed on-screen lifetime.
//!
//! - **messages**: `Notification`, `Severity`, lifecycle events
//! - **queue**: `NotificationQueue`, the per-notification timers

mod messages;
mod queue;

pub use messages::{Notification, NotificationEvent, NotificationId, Severity};
pub use queue::{NotificationConfig, NotificationQueue};

//! Auto-dismissing notification queue
//!
//! Every pushed notification runs its own lifecycle on the driver's
//! millisecond clock:
//!
//! ```text
//! push ──enter_delay──▶ Entered ──display──▶ Leaving ──exit──▶ Removed
//!   t0               t0 + 100           t0 + 3000         t0 + 3300
//! ```
//!
//! There is no depth limit, no de-duplication and no way to cancel a
//! notification early.

use serde::Deserialize;

use super::messages::{Notification, NotificationEvent, NotificationId, Severity};

/// Notification timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NotificationConfig {
    /// Delay before the enter transition completes (ms)
    #[serde(default = "default_enter_delay")]
    pub enter_delay_ms: u64,

    /// Time from push until the exit transition starts (ms)
    #[serde(default = "default_display")]
    pub display_ms: u64,

    /// Length of the exit transition (ms)
    #[serde(default = "default_exit")]
    pub exit_ms: u64,
}

fn default_enter_delay() -> u64 {
    100
}

fn default_display() -> u64 {
    3000
}

fn default_exit() -> u64 {
    300
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: default_enter_delay(),
            display_ms: default_display(),
            exit_ms: default_exit(),
        }
    }
}

impl NotificationConfig {
    /// Total time a notification stays in the queue
    pub fn lifetime_ms(&self) -> u64 {
        self.display_ms + self.exit_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Debug)]
struct Live {
    id: NotificationId,
    pushed_at_ms: i64,
    phase: Phase,
}

/// Queue of visible notifications
#[derive(Debug)]
pub struct NotificationQueue {
    live: Vec<Live>,
    config: NotificationConfig,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new(config: NotificationConfig) -> Self {
        Self {
            live: Vec::new(),
            config,
            next_id: 1,
        }
    }

    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// Present a notification and start its lifecycle
    ///
    /// The returned notification should be shown immediately.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now_ms: i64,
    ) -> Notification {
        let id = NotificationId::new(self.next_id);
        self.next_id += 1;

        let notification = Notification {
            id,
            message: message.into(),
            severity,
            created_at_ms: now_ms,
        };

        self.live.push(Live {
            id,
            pushed_at_ms: now_ms,
            phase: Phase::Entering,
        });

        tracing::debug!(
            notification_id = %id,
            severity = %severity,
            message = %notification.message,
            "Notification pushed"
        );

        notification
    }

    /// Collect every lifecycle transition due at `now_ms`
    ///
    /// Events come out in push order. A late tick reports all transitions a
    /// notification skipped, in lifecycle order.
    pub fn tick(&mut self, now_ms: i64) -> Vec<NotificationEvent> {
        let enter_at = self.config.enter_delay_ms as i64;
        let leave_at = self.config.display_ms as i64;
        let remove_at = self.config.lifetime_ms() as i64;

        let mut events = Vec::new();

        self.live.retain_mut(|live| {
            let age = now_ms - live.pushed_at_ms;

            if live.phase == Phase::Entering && age >= enter_at {
                live.phase = Phase::Visible;
                events.push(NotificationEvent::Entered(live.id));
            }
            if live.phase == Phase::Visible && age >= leave_at {
                live.phase = Phase::Leaving;
                events.push(NotificationEvent::Leaving(live.id));
            }
            if live.phase == Phase::Leaving && age >= remove_at {
                events.push(NotificationEvent::Removed(live.id));
                return false;
            }
            true
        });

        events
    }

    /// True when nothing is on screen
    pub fn is_idle(&self) -> bool {
        self.live.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(NotificationConfig::default())
    }
}

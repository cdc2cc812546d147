//! Linear integer tween
//!
//! A `Tween` walks from one integer to another in a fixed number of equal
//! steps. Intermediate values are floored; the last value is always exactly
//! the target and is produced only once.

use serde::Deserialize;

/// Timing of counter animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TweenConfig {
    /// Number of frames a full tween takes
    #[serde(default = "default_steps")]
    pub steps: u32,

    /// Delay between frames in milliseconds
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
}

fn default_steps() -> u32 {
    20
}

fn default_frame_interval() -> u64 {
    50 // 20 steps over one second
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            frame_interval_ms: default_frame_interval(),
        }
    }
}

/// Lazy sequence of values from `from` towards `to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tween {
    from: i64,
    to: i64,
    steps: u32,
    /// Index of the next step to produce (1-based)
    step: u32,
    done: bool,
}

impl Tween {
    /// Create a tween; `steps` of zero is treated as one
    pub fn new(from: i64, to: i64, steps: u32) -> Self {
        Self {
            from,
            to,
            steps: steps.max(1),
            step: 1,
            done: false,
        }
    }

    pub fn from_value(&self) -> i64 {
        self.from
    }

    pub fn target(&self) -> i64 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.done
    }

    /// Floored value at step `k` of `steps`
    fn value_at(&self, k: u32) -> i64 {
        let delta = (self.to as i128 - self.from as i128) * k as i128;
        let offset = delta.div_euclid(self.steps as i128);
        (self.from as i128 + offset) as i64
    }
}

impl Iterator for Tween {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }

        if self.step >= self.steps || self.from == self.to {
            self.done = true;
            return Some(self.to);
        }

        let value = self.value_at(self.step);
        self.step += 1;

        // Flooring can land on the target early when counting down; finish
        // there instead of repeating it.
        if value == self.to {
            self.done = true;
        }

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            let remaining = (self.steps - self.step + 1) as usize;
            (1, Some(remaining))
        }
    }
}

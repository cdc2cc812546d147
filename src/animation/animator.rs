//! Per-slot tween scheduling
//!
//! Each display slot runs at most one tween. Starting a new tween on a slot
//! replaces the one in flight, and the new run starts from whatever value the
//! slot was showing at that moment.

use super::tween::{Tween, TweenConfig};

#[derive(Debug)]
struct Slot<K> {
    key: K,
    /// Value currently shown in the slot
    displayed: i64,
    /// Tween in flight, if any
    tween: Option<Tween>,
}

/// Drives counter animations for a set of display slots
#[derive(Debug)]
pub struct Animator<K> {
    slots: Vec<Slot<K>>,
    config: TweenConfig,
}

impl<K: Copy + PartialEq> Animator<K> {
    /// Create an animator with no slots
    pub fn new(config: TweenConfig) -> Self {
        Self {
            slots: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &TweenConfig {
        &self.config
    }

    /// Start animating `slot` towards `target`
    ///
    /// Slots are created on first use with a displayed value of zero.
    pub fn animate(&mut self, slot: K, target: i64) {
        let steps = self.config.steps;
        let entry = self.slot_mut(slot);

        if entry.tween.is_some() {
            tracing::trace!(from = entry.displayed, target, "Restarting tween");
        }
        entry.tween = Some(Tween::new(entry.displayed, target, steps));
    }

    /// Advance every running tween by one frame
    ///
    /// Returns the slots whose displayed value was produced this frame, in
    /// slot creation order. Finished tweens are dropped.
    pub fn step(&mut self) -> Vec<(K, i64)> {
        let mut frame = Vec::new();

        for slot in &mut self.slots {
            let Some(tween) = slot.tween.as_mut() else {
                continue;
            };

            if let Some(value) = tween.next() {
                slot.displayed = value;
                frame.push((slot.key, value));
            }

            if tween.is_finished() {
                slot.tween = None;
            }
        }

        frame
    }

    /// Value currently shown in `slot` (zero for unknown slots)
    pub fn value(&self, slot: K) -> i64 {
        self.slots
            .iter()
            .find(|s| s.key == slot)
            .map(|s| s.displayed)
            .unwrap_or(0)
    }

    /// Target of the tween running in `slot`, if any
    pub fn target(&self, slot: K) -> Option<i64> {
        self.slots
            .iter()
            .find(|s| s.key == slot)
            .and_then(|s| s.tween.as_ref())
            .map(|t| t.target())
    }

    /// Whether `slot` has ever been animated
    pub fn contains(&self, slot: K) -> bool {
        self.slots.iter().any(|s| s.key == slot)
    }

    pub fn is_animating(&self, slot: K) -> bool {
        self.target(slot).is_some()
    }

    /// True when no slot has a tween in flight
    pub fn is_idle(&self) -> bool {
        self.slots.iter().all(|s| s.tween.is_none())
    }

    fn slot_mut(&mut self, key: K) -> &mut Slot<K> {
        let index = match self.slots.iter().position(|s| s.key == key) {
            Some(index) => index,
            None => {
                self.slots.push(Slot {
                    key,
                    displayed: 0,
                    tween: None,
                });
                self.slots.len() - 1
            }
        };
        &mut self.slots[index]
    }
}

impl<K: Copy + PartialEq> Default for Animator<K> {
    fn default() -> Self {
        Self::new(TweenConfig::default())
    }
}

//! Browser Timers
//!
//! Starts the dashboard and drives it with `setInterval` callbacks: the header
//! clock, the simulated progress roll and the animation frame.

use gloo_timers::callback::Interval;
use leptos::*;

use super::global::GlobalState;

/// Render the initial dashboard and start its intervals
///
/// Intervals are cancelled when the owning reactive scope is disposed.
pub fn start_dashboard(state: GlobalState) {
    state.with_controller(|controller| controller.start(&chrono::Local::now()));
    web_sys::console::log_1(&"Taskpulse dashboard started".into());

    let clock = {
        let state = state.clone();
        Interval::new(millis(state.config.dashboard.clock_interval_ms), move || {
            state.with_controller(|controller| controller.tick_clock(&chrono::Local::now()));
        })
    };

    let progress = {
        let state = state.clone();
        Interval::new(millis(state.config.progress.interval_ms), move || {
            let roll = js_sys::Math::random();
            state.with_controller(|controller| {
                controller.tick_progress(roll);
            });
        })
    };

    let frame = Interval::new(millis(state.config.animation.frame_interval_ms), move || {
        let now_ms = js_sys::Date::now() as i64;
        state.with_controller(|controller| controller.on_frame(now_ms));
    });

    on_cleanup(move || {
        drop(clock);
        drop(progress);
        drop(frame);
    });
}

fn millis(ms: u64) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}

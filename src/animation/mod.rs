//! Counter Animation
//!
//! - **tween**: `Tween`, a lazy floored linear interpolation between integers
//! - **animator**: `Animator`, one tween per display slot with
//!   cancel-on-restart
//!
//! Nothing here owns a timer. Drivers call [`Animator::step`] once per frame
//! (every `frame_interval_ms`) and render the values it returns.

pub mod animator;
pub mod tween;

pub use animator::Animator;
pub use tween::{Tween, TweenConfig};

//! State Management
//!
//! Global dashboard state and the browser timers that drive it.

pub mod global;
pub mod timers;

pub use global::{provide_global_state, GlobalState, ToastPhase, ToastView};
pub use timers::start_dashboard;

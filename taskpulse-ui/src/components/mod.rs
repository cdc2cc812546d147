//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod stat_card;
pub mod task_list;
pub mod toast;

pub use nav::Nav;
pub use stat_card::StatCard;
pub use task_list::{TaskEntry, TaskList};
pub use toast::Toast;

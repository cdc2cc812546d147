//! App Root Component
//!
//! Main application component with global providers.

use leptos::*;
use taskpulse::Config;

use crate::components::{Nav, Toast};
use crate::pages::Dashboard;
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::timers::start_dashboard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components, then start the timers
    let state = provide_global_state(Config::default());
    start_dashboard(state);

    view! {
        <div id="top" class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Navigation header
            <Nav />

            // Main content area
            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <Dashboard />
            </main>

            // Footer with task summary
            <Footer />

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Footer component showing the task summary
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let tasks = state.signals.tasks;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>
                    {move || {
                        let (total, done) = tasks.with(|tasks| {
                            (tasks.len(), tasks.iter().filter(|t| t.completed).count())
                        });
                        format!("{} tasks, {} completed", total, done)
                    }}
                </span>
                <span>{concat!("Taskpulse v", env!("CARGO_PKG_VERSION"))}</span>
            </div>
        </footer>
    }
}

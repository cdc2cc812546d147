//! Navigation Component
//!
//! Header bar with brand, section links and the live clock.

use leptos::*;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let time = state.signals.time;

    view! {
        <nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <a href="#top" class="flex items-center space-x-3">
                        <span class="text-2xl">"⏱"</span>
                        <span class="text-xl font-bold text-white">"Taskpulse"</span>
                    </a>

                    // Section links
                    <div class="hidden md:flex items-center space-x-1">
                        <NavLink href="#stats" label="Stats" />
                        <NavLink href="#tasks" label="Tasks" />
                    </div>

                    // Live clock
                    <div class="text-sm text-gray-300 tabular-nums">
                        {move || time.get()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// In-page navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
        >
            {label}
        </a>
    }
}

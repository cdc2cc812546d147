//! Stat Card Component
//!
//! Displays one animated dashboard counter.

use leptos::*;
use taskpulse::CounterSlot;

use crate::state::global::GlobalState;

/// Stat card component
#[component]
pub fn StatCard(
    /// Counter shown by this card
    slot: CounterSlot,
    /// Icon rendered next to the label
    icon: &'static str,
    /// Optional unit label
    #[prop(optional)]
    unit: Option<&'static str>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let value = state.signals.counter(slot);

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            // Header with label
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{slot.label()}</span>
                <span class="text-xl">{icon}</span>
            </div>

            // Animated value
            <div class="text-3xl font-bold mt-2 tabular-nums">
                {move || value.get()}
                {unit.map(|u| view! { <span class="text-gray-500 text-sm ml-1">{u}</span> })}
            </div>
        </div>
    }
}

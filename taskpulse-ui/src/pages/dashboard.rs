//! Dashboard Page
//!
//! Stats row and the task list.

use leptos::*;
use taskpulse::CounterSlot;

use crate::components::{StatCard, TaskEntry, TaskList};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your day at a glance"</p>
            </div>

            // Stats row
            <section id="stats">
                <h2 class="text-lg font-semibold mb-4">"Today"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <StatCard slot=CounterSlot::CompletedTasks icon="✅" />
                    <StatCard slot=CounterSlot::HoursWorked icon="⏳" unit="h" />
                    <StatCard slot=CounterSlot::ActiveProjects icon="📁" />
                </div>
            </section>

            // Tasks
            <section id="tasks" class="bg-gray-800 rounded-xl p-6 space-y-4">
                <h2 class="text-xl font-semibold">"Tasks"</h2>
                <TaskEntry />
                <TaskList />
            </section>
        </div>
    }
}

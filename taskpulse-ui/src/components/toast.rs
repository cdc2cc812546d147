//! Toast Notification Component
//!
//! Shows dashboard notifications with enter and exit transitions.

use leptos::*;
use taskpulse::Severity;

use crate::state::global::{GlobalState, ToastPhase, ToastView};

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let toasts = state.signals.toasts;

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| view! { <ToastMessage toast=toast /> }
            />
        </div>
    }
}

fn severity_style(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "bg-green-600",
        Severity::Error => "bg-red-600",
        Severity::Info => "bg-blue-600",
    }
}

fn phase_class(phase: ToastPhase) -> &'static str {
    match phase {
        ToastPhase::Entering | ToastPhase::Leaving => "opacity-0 translate-x-full",
        ToastPhase::Shown => "opacity-100 translate-x-0",
    }
}

#[component]
fn ToastMessage(toast: ToastView) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = toast.id;

    // The row is keyed by id, so follow the phase through the signal
    let phase = create_memo(move |_| {
        state
            .signals
            .toasts
            .with(|toasts| toasts.iter().find(|t| t.id == id).map(|t| t.phase))
            .unwrap_or(ToastPhase::Leaving)
    });

    let bg_class = severity_style(toast.severity);

    view! {
        <div class=move || format!(
            "flex items-center space-x-3 {} {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out",
            bg_class,
            phase_class(phase.get())
        )>
            <span class="text-lg">{toast.severity.icon()}</span>
            <span class="text-sm font-medium">{toast.message}</span>
        </div>
    }
}

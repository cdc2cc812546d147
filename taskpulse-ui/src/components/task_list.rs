//! Task Components
//!
//! Entry form for new tasks and the task list. Rows emit toggle and delete
//! actions carrying their own task id.

use leptos::*;
use taskpulse::{Task, UiEvent};

use crate::state::global::GlobalState;

/// New-task form component
#[component]
pub fn TaskEntry() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let input = state.signals.input;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.dispatch(UiEvent::Submit);
    };

    view! {
        <form on:submit=on_submit class="flex space-x-2">
            <input
                type="text"
                placeholder="What needs doing?"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                class="flex-1 bg-gray-700 border border-gray-600 rounded-lg px-4 py-2
                       focus:outline-none focus:border-primary-500"
            />
            <button
                type="submit"
                class="bg-primary-600 hover:bg-primary-700 rounded-lg px-6 py-2 font-semibold
                       transition-colors"
            >
                "Add Task"
            </button>
        </form>
    }
}

/// Task list component
#[component]
pub fn TaskList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let tasks = state.signals.tasks;

    view! {
        <ul class="divide-y divide-gray-700">
            <For
                each=move || tasks.get()
                key=|task| (task.id, task.completed)
                children=move |task| view! { <TaskItem task=task /> }
            />
        </ul>
        {move || tasks.with(Vec::is_empty).then(|| view! {
            <p class="text-gray-500 text-center py-6">"No tasks yet"</p>
        })}
    }
}

#[component]
fn TaskItem(task: Task) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = task.id;

    let toggle = {
        let state = state.clone();
        move |_: web_sys::MouseEvent| state.dispatch(UiEvent::Toggle(id))
    };
    let delete = move |_: web_sys::MouseEvent| state.dispatch(UiEvent::Delete(id));

    let text_class = if task.completed {
        "flex-1 line-through text-gray-500"
    } else {
        "flex-1"
    };

    view! {
        <li class="flex items-center space-x-3 py-3">
            <span class=text_class>{task.text.clone()}</span>
            <button
                type="button"
                on:click=toggle
                class="px-3 py-1 rounded text-sm bg-gray-700 hover:bg-gray-600 transition-colors"
            >
                {task.action_label()}
            </button>
            <button
                type="button"
                on:click=delete
                class="px-3 py-1 rounded text-sm bg-red-700 hover:bg-red-600 transition-colors"
            >
                "Delete"
            </button>
        </li>
    }
}

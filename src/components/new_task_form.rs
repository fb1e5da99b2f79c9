//! New Task Form Component
//!
//! Form for creating a new task. Title is required; an empty title
//! never issues a network call. Drafts are kept on failure so the
//! user can retry.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::context::use_app_context;
use crate::models::TaskPayload;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let task_title = title.get();
        if task_title.is_empty() {
            return;
        }
        let task_description = description.get();
        ctx.clear_error();
        let Some(token) = ctx.token() else {
            return;
        };

        spawn_local(async move {
            let payload = TaskPayload {
                title: &task_title,
                description: &task_description,
                completed: false,
            };
            match api::create_task(&token, &payload).await {
                Ok(_) => {
                    ctx.notify_success("Task created successfully!");
                    set_title.set(String::new());
                    set_description.set(String::new());
                    ctx.refresh_tasks();
                }
                Err(ApiError::Rejected(_)) => ctx.notify_error("Failed to create task"),
                Err(ApiError::Connection) => ctx.notify_error("Connection error"),
            }
        });
    };

    view! {
        <div class="card">
            <h3>"Create New Task"</h3>
            <form on:submit=create_task>
                <input
                    type="text"
                    placeholder="Task Title"
                    required
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                />
                <input
                    type="text"
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_description.set(input.value());
                    }
                />
                <button type="submit" class="btn-primary">"Create Task"</button>
            </form>
        </div>
    }
}

//! Edit Task Modal Component
//!
//! Admin-only modal bound to a mutable copy of one task. Saving
//! sends the full record; on failure the modal stays open so the
//! admin can retry or cancel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::use_app_context;
use crate::models::{Task, TaskPayload};

#[component]
pub fn EditTaskModal(editing: RwSignal<Option<Task>>) -> impl IntoView {
    let ctx = use_app_context();

    let save = move |_| {
        let Some(task) = editing.get_untracked() else {
            return;
        };
        ctx.clear_error();
        let Some(token) = ctx.token() else {
            return;
        };
        spawn_local(async move {
            let payload = TaskPayload {
                title: &task.title,
                description: &task.description,
                completed: task.completed,
            };
            match api::update_task(&token, task.id, &payload).await {
                Ok(_) => {
                    ctx.notify_success("Task updated!");
                    editing.set(None);
                    ctx.refresh_tasks();
                }
                Err(_) => ctx.notify_error("Update failed"),
            }
        });
    };

    view! {
        <Show when=move || editing.get().is_some()>
            <div class="modal">
                <div class="modal-content">
                    <h3>
                        {move || {
                            let id = editing.get().map(|task| task.id).unwrap_or_default();
                            format!("Edit Task #{id}")
                        }}
                    </h3>
                    <input
                        type="text"
                        prop:value=move || {
                            editing.get().map(|task| task.title).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let value = input.value();
                            editing.update(|slot| {
                                if let Some(task) = slot {
                                    task.title = value;
                                }
                            });
                        }
                    />
                    <input
                        type="text"
                        prop:value=move || {
                            editing.get().map(|task| task.description).unwrap_or_default()
                        }
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let value = input.value();
                            editing.update(|slot| {
                                if let Some(task) = slot {
                                    task.description = value;
                                }
                            });
                        }
                    />
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || {
                                editing.get().map(|task| task.completed).unwrap_or(false)
                            }
                            on:change=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                let checked = input.checked();
                                editing.update(|slot| {
                                    if let Some(task) = slot {
                                        task.completed = checked;
                                    }
                                });
                            }
                        />
                        "Completed"
                    </label>
                    <div>
                        <button class="btn-primary" on:click=save>
                            "Save"
                        </button>
                        <button class="btn-secondary" on:click=move |_| editing.set(None)>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

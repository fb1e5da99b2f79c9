//! Admin Dashboard Component
//!
//! Cross-user task table with edit/delete, plus user management.
//! Hiding these affordances from non-admins is a usability choice,
//! not a security control; the server rejects out-of-role calls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, EditTaskModal, StatusBanners};
use crate::context::use_app_context;
use crate::models::{Role, Task};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Edit-modal state: Some = modal open, bound to this copy
    let editing: RwSignal<Option<Task>> = RwSignal::new(None);

    let username = move || {
        store
            .session()
            .get()
            .map(|session| session.identity.username)
            .unwrap_or_default()
    };

    let delete_task = move |id: i64| {
        ctx.clear_error();
        let Some(token) = ctx.token() else {
            return;
        };
        spawn_local(async move {
            match api::delete_task(&token, id).await {
                Ok(()) => {
                    ctx.notify_success("Task deleted!");
                    ctx.refresh_tasks();
                }
                Err(_) => ctx.notify_error("Delete failed"),
            }
        });
    };

    let delete_user = move |id: i64| {
        ctx.clear_error();
        let Some(token) = ctx.token() else {
            return;
        };
        spawn_local(async move {
            match api::delete_user(&token, id).await {
                Ok(()) => {
                    ctx.notify_success("User deleted!");
                    // Deleting a user cascades to their tasks, so both
                    // caches have to resynchronize
                    ctx.refresh_users();
                    ctx.refresh_tasks();
                }
                Err(_) => ctx.notify_error("Delete failed"),
            }
        });
    };

    view! {
        <div class="container">
            <div class="header">
                <h2>{move || format!("Admin Dashboard - {}", username())}</h2>
                <button class="btn-secondary" on:click=move |_| ctx.logout()>
                    "Logout"
                </button>
            </div>

            <StatusBanners />

            <div class="card">
                <h3>{move || format!("All Users ({})", store.users().get().len())}</h3>
                <table>
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Username"</th>
                            <th>"Role"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || store.users().get().into_iter().map(|account| {
                            let account_id = account.id;
                            // No delete control on the caller's own row
                            let own_row = account.username == username();
                            view! {
                                <tr>
                                    <td>{account_id}</td>
                                    <td>{account.username.clone()}</td>
                                    <td>{match account.role {
                                        Role::Admin => "Admin",
                                        Role::User => "User",
                                    }}</td>
                                    <td>
                                        <Show when=move || !own_row>
                                            <DeleteConfirmButton
                                                prompt="Delete user and all their tasks?"
                                                on_confirm=Callback::new(move |_| delete_user(account_id))
                                            />
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="card">
                <h3>{move || format!("All Tasks ({})", store.tasks().get().len())}</h3>
                <table>
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Title"</th>
                            <th>"Description"</th>
                            <th>"Owner ID"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || store.tasks().get().into_iter().map(|task| {
                            let task_id = task.id;
                            let edit_copy = task.clone();
                            let description = if task.description.is_empty() {
                                "-".to_string()
                            } else {
                                task.description.clone()
                            };
                            view! {
                                <tr>
                                    <td>{task_id}</td>
                                    <td>{task.title.clone()}</td>
                                    <td>{description}</td>
                                    <td>{task.owner_id}</td>
                                    <td>{if task.completed { "Done" } else { "Pending" }}</td>
                                    <td>
                                        <button
                                            class="btn-primary"
                                            on:click=move |_| editing.set(Some(edit_copy.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            prompt="Delete this task?"
                                            on_confirm=Callback::new(move |_| delete_task(task_id))
                                        />
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <EditTaskModal editing=editing />
        </div>
    }
}

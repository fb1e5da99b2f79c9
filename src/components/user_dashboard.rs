//! User Dashboard Component
//!
//! Read-only task list plus the create form. Editing and deleting
//! are admin affordances and never shown here.

use leptos::prelude::*;

use crate::components::{NewTaskForm, StatusBanners};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn UserDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let username = move || {
        store
            .session()
            .get()
            .map(|session| session.identity.username)
            .unwrap_or_default()
    };

    view! {
        <div class="container">
            <div class="header">
                <h2>{move || format!("Welcome, {}", username())}</h2>
                <button class="btn-secondary" on:click=move |_| ctx.logout()>
                    "Logout"
                </button>
            </div>

            <StatusBanners />

            <NewTaskForm />

            <div class="card">
                <h3>{move || format!("My Tasks ({})", store.tasks().get().len())}</h3>
                <Show
                    when=move || !store.tasks().get().is_empty()
                    fallback=|| view! { <p>"No tasks yet. Create your first task!"</p> }
                >
                    <table>
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Description"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || store.tasks().get().into_iter().map(|task| {
                                let description = if task.description.is_empty() {
                                    "-".to_string()
                                } else {
                                    task.description.clone()
                                };
                                view! {
                                    <tr>
                                        <td>{task.title.clone()}</td>
                                        <td>{description}</td>
                                        <td>{if task.completed { "Done" } else { "Pending" }}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </Show>
                <p class="info">"To update or delete tasks, contact admin"</p>
            </div>
        </div>
    }
}

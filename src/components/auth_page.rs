//! Auth Page Component
//!
//! Login/Register tabs shown while no session exists.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::components::StatusBanners;
use crate::context::use_app_context;

const CONNECTION_HINT: &str = "Connection error. Make sure backend is running.";

#[derive(Clone, Copy, PartialEq)]
enum AuthTab {
    Login,
    Register,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_app_context();

    let (tab, set_tab) = signal(AuthTab::Login);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.clear_error();
        let name = username.get();
        let pass = password.get();
        if name.is_empty() || pass.is_empty() {
            return;
        }

        match tab.get() {
            AuthTab::Login => spawn_local(async move {
                match api::login(&name, &pass).await {
                    Ok(resp) => {
                        set_username.set(String::new());
                        set_password.set(String::new());
                        ctx.establish_session(resp);
                    }
                    Err(ApiError::Rejected(detail)) => ctx.notify_error(&detail),
                    Err(ApiError::Connection) => ctx.notify_error(CONNECTION_HINT),
                }
            }),
            AuthTab::Register => spawn_local(async move {
                match api::register(&name, &pass).await {
                    Ok(()) => {
                        ctx.notify_success("Registration successful! Please login.");
                        set_tab.set(AuthTab::Login);
                        set_username.set(String::new());
                        set_password.set(String::new());
                    }
                    Err(ApiError::Rejected(detail)) => ctx.notify_error(&detail),
                    Err(ApiError::Connection) => ctx.notify_error(CONNECTION_HINT),
                }
            }),
        }
    };

    view! {
        <div class="container">
            <div class="card">
                <h1>"Task Management"</h1>

                <StatusBanners />

                <div class="tabs">
                    <button
                        class=move || if tab.get() == AuthTab::Login { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(AuthTab::Login)
                    >
                        "Login"
                    </button>
                    <button
                        class=move || if tab.get() == AuthTab::Register { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(AuthTab::Register)
                    >
                        "Register"
                    </button>
                </div>

                <form on:submit=submit>
                    <input
                        type="text"
                        placeholder="Username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_username.set(input.value());
                        }
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_password.set(input.value());
                        }
                    />
                    <button type="submit" class="btn-primary">
                        {move || match tab.get() {
                            AuthTab::Login => "Login",
                            AuthTab::Register => "Register",
                        }}
                    </button>
                </form>

                <Show when=move || tab.get() == AuthTab::Register>
                    <p class="info">"All new accounts are created as 'User' role"</p>
                </Show>
            </div>
        </div>
    }
}

//! Status Banners Component
//!
//! Error and success notification banners. Error text is sticky;
//! success text is cleared by the context's timer.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatusBanners() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || !store.error().get().is_empty()>
            <div class="error">{move || store.error().get()}</div>
        </Show>
        <Show when=move || !store.success().get().is_empty()>
            <div class="success">{move || store.success().get()}</div>
        </Show>
    }
}

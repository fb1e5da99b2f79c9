//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. This is
//! the single owner of all mutable client state; everything the view
//! shows derives from it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Session, Task, UserAccount};
use crate::session;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authenticated session, None when logged out
    pub session: Option<Session>,
    /// Task cache, wholesale-replaced on every refresh
    pub tasks: Vec<Task>,
    /// User account cache (admin view), wholesale-replaced
    pub users: Vec<UserAccount>,
    /// Sticky error notification, empty = none
    pub error: String,
    /// Self-expiring success notification, empty = none
    pub success: String,
}

impl AppState {
    /// Startup state: session rehydrated from localStorage, caches empty
    pub fn restored() -> Self {
        Self {
            session: session::restore(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

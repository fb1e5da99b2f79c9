//! Taskboard Frontend App
//!
//! Root component: restores the session at startup, reloads caches
//! whenever a session is established, and selects one of the three
//! top-level views.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AdminDashboard, AuthPage, UserDashboard};
use crate::context::AppContext;
use crate::models::{Role, Session};
use crate::store::{AppState, AppStateStoreFields};

/// Top-level view, derived from the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Auth,
    UserDashboard,
    AdminDashboard,
}

/// Three-way view selection. The only way back to Auth is losing the
/// session (logout); an expired token is not detected here.
pub fn select_view(session: Option<&Session>) -> AppView {
    match session {
        None => AppView::Auth,
        Some(session) => match session.identity.role {
            Role::User => AppView::UserDashboard,
            Role::Admin => AppView::AdminDashboard,
        },
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::restored());
    let ctx = AppContext::new(store);
    provide_context(store);
    provide_context(ctx);

    // Load caches on login/restore; admins also get the user list
    Effect::new(move |_| {
        if let Some(session) = store.session().get() {
            ctx.refresh_tasks();
            if session.identity.role == Role::Admin {
                ctx.refresh_users();
            }
        }
    });

    view! {
        {move || match select_view(store.session().get().as_ref()) {
            AppView::Auth => view! { <AuthPage /> }.into_any(),
            AppView::UserDashboard => view! { <UserDashboard /> }.into_any(),
            AppView::AdminDashboard => view! { <AdminDashboard /> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Identity;

    fn session(role: Role) -> Session {
        Session {
            token: "tok".to_string(),
            identity: Identity {
                username: "alice".to_string(),
                role,
            },
        }
    }

    #[test]
    fn test_no_session_is_unauthenticated() {
        assert_eq!(select_view(None), AppView::Auth);
    }

    #[test]
    fn test_view_follows_role() {
        assert_eq!(select_view(Some(&session(Role::User))), AppView::UserDashboard);
        assert_eq!(select_view(Some(&session(Role::Admin))), AppView::AdminDashboard);
    }
}

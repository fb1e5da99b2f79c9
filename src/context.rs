//! Application Context
//!
//! Orchestration methods over the app store: session lifecycle,
//! cache refreshes, and the notification channels. Provided via the
//! Leptos Context API so any component can drive it.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{Identity, LoginResponse, Role, Session};
use crate::session;
use crate::store::{AppStateStoreFields, AppStore};

/// How long a success message stays up before self-clearing
const SUCCESS_DISPLAY_MS: u32 = 3_000;

/// One-slot timer holder. Arming drops any previously armed handle;
/// for gloo timeouts, dropping cancels the pending callback, so a
/// superseded message can never clear its successor.
struct TimerSlot<T> {
    armed: RefCell<Option<T>>,
}

impl<T> TimerSlot<T> {
    const fn new() -> Self {
        Self {
            armed: RefCell::new(None),
        }
    }

    fn arm(&self, handle: T) {
        *self.armed.borrow_mut() = Some(handle);
    }
}

thread_local! {
    // The resettable timer for the success channel
    static SUCCESS_TIMER: TimerSlot<Timeout> = const { TimerSlot::new() };
}

/// App-wide orchestration handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    // ========================
    // Session lifecycle
    // ========================

    /// Establish a session from a successful login and persist it
    pub fn establish_session(&self, resp: LoginResponse) {
        let session = Session {
            token: resp.access_token,
            identity: Identity {
                username: resp.username,
                role: resp.role,
            },
        };
        session::persist(&session);
        self.store.session().set(Some(session));
    }

    /// Clear session, caches, and persisted credentials. Idempotent.
    pub fn logout(&self) {
        session::clear();
        self.store.session().set(None);
        self.store.tasks().set(Vec::new());
        self.store.users().set(Vec::new());
    }

    // ========================
    // Cache refreshes
    // ========================

    /// Reload the task cache for the current session, choosing the
    /// endpoint by role. Failures are logged, not surfaced; the
    /// previous cache stays in place.
    pub fn refresh_tasks(&self) {
        let store = self.store;
        let Some(session) = store.session().get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_tasks(&session.token, session.identity.role).await {
                Ok(tasks) => {
                    // A response from a previous session must not leak
                    // into the current one
                    if token_still_current(&store, &session.token) {
                        store.tasks().set(tasks);
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Error fetching tasks: {err:?}").into(),
                    );
                }
            }
        });
    }

    /// Reload the user-account cache (admin dashboard). Same silent
    /// failure policy as the task refresh.
    pub fn refresh_users(&self) {
        let store = self.store;
        let Some(session) = store.session().get_untracked() else {
            return;
        };
        if session.identity.role != Role::Admin {
            return;
        }
        spawn_local(async move {
            match api::fetch_users(&session.token).await {
                Ok(users) => {
                    if token_still_current(&store, &session.token) {
                        store.users().set(users);
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Error fetching users: {err:?}").into(),
                    );
                }
            }
        });
    }

    /// Bearer token of the current session, if any
    pub fn token(&self) -> Option<String> {
        self.store
            .session()
            .get_untracked()
            .map(|session| session.token)
    }

    // ========================
    // Notifications
    // ========================

    /// Set the sticky error message. It persists until the next
    /// action replaces or clears it.
    pub fn notify_error(&self, message: &str) {
        self.store.error().set(message.to_string());
    }

    pub fn clear_error(&self) {
        self.store.error().set(String::new());
    }

    /// Show a success message that clears itself after a fixed delay.
    /// Last write wins; the previous timer is cancelled.
    pub fn notify_success(&self, message: &str) {
        let store = self.store;
        store.success().set(message.to_string());
        let timer = Timeout::new(SUCCESS_DISPLAY_MS, move || {
            store.success().set(String::new());
        });
        SUCCESS_TIMER.with(|slot| slot.arm(timer));
    }
}

fn token_still_current(store: &AppStore, token: &str) -> bool {
    store
        .session()
        .get_untracked()
        .is_some_and(|session| session.token == token)
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::TimerSlot;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stand-in for a timeout handle: dropping it counts as a cancel
    struct CancelOnDrop(Rc<Cell<u32>>);

    impl Drop for CancelOnDrop {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_arming_cancels_superseded_timer() {
        let cancelled = Rc::new(Cell::new(0));
        let slot = TimerSlot::new();

        slot.arm(CancelOnDrop(Rc::clone(&cancelled)));
        assert_eq!(cancelled.get(), 0, "first timer stays armed");

        // A second success message replaces the handle; the stale
        // timer must be cancelled so it cannot clear the new text
        slot.arm(CancelOnDrop(Rc::clone(&cancelled)));
        assert_eq!(cancelled.get(), 1);

        slot.arm(CancelOnDrop(Rc::clone(&cancelled)));
        assert_eq!(cancelled.get(), 2, "exactly one cancel per replacement");
    }
}

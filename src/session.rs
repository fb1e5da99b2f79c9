//! Session Persistence
//!
//! Stores the authenticated session in browser localStorage so a
//! reload stays logged in. Token and identity live under two fixed
//! keys; both must be present and parseable to count as a session.

use crate::models::{Identity, Session};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn parse_identity(raw: &str) -> Option<Identity> {
    serde_json::from_str(raw).ok()
}

/// Rehydrate the session at startup. Either key missing or
/// unparseable means logged out.
pub fn restore() -> Option<Session> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
    let raw_identity = storage.get_item(USER_KEY).ok().flatten()?;
    let identity = parse_identity(&raw_identity)?;
    Some(Session { token, identity })
}

/// Persist both keys on session establishment
pub fn persist(session: &Session) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        if let Ok(json) = serde_json::to_string(&session.identity) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

/// Remove both keys on logout. Safe to call with nothing stored.
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_parse_identity() {
        let identity = parse_identity(r#"{"username":"alice","role":"admin"}"#).unwrap();
        assert_eq!(identity.username, "alice");
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn test_parse_identity_rejects_garbage() {
        assert!(parse_identity("null").is_none());
        assert!(parse_identity("not json").is_none());
        assert!(parse_identity(r#"{"username":"alice","role":"root"}"#).is_none());
    }
}

//! Frontend Models
//!
//! Data structures matching the task service wire format.

use serde::{Deserialize, Serialize};

/// Account role, serialized lowercase on the wire ("user" / "admin")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Who the session belongs to (persisted as JSON under the "user" key)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub role: Role,
}

/// Authenticated session: bearer token plus identity.
/// The two are always set and cleared together.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub identity: Identity,
}

/// Task record (matches backend TaskResponse)
///
/// `owner_id` is present in the admin projection; the per-user
/// endpoint may omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
}

/// Create/update request body
#[derive(Debug, Clone, Serialize)]
pub struct TaskPayload<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub completed: bool,
}

/// User account record (admin view only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// Successful /login response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub username: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::from_str::<Role>("\"user\"").unwrap(), Role::User);
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    }

    #[test]
    fn test_task_user_projection_has_no_owner() {
        // The per-user endpoint omits owner_id
        let task: Task =
            serde_json::from_str(r#"{"id":1,"title":"Buy milk","description":"","completed":false}"#)
                .unwrap();
        assert_eq!(task.owner_id, None);
        assert!(!task.completed);
    }

    #[test]
    fn test_task_admin_projection() {
        let task: Task = serde_json::from_str(
            r#"{"id":5,"title":"Audit","description":"q3","completed":true,"owner_id":2}"#,
        )
        .unwrap();
        assert_eq!(task.owner_id, Some(2));
        assert!(task.completed);
    }

    #[test]
    fn test_task_payload_omits_id() {
        let payload = TaskPayload { title: "Buy milk", description: "", completed: false };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"title":"Buy milk","description":"","completed":false}"#);
    }

    #[test]
    fn test_login_response() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"access_token":"abc123","username":"alice","role":"admin"}"#)
                .unwrap();
        assert_eq!(resp.access_token, "abc123");
        assert_eq!(resp.role, Role::Admin);
    }
}

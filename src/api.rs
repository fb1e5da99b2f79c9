//! Task Service API Client
//!
//! HTTP bindings to the backend endpoints.

use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::models::{LoginResponse, Role, Task, TaskPayload, UserAccount};

const API_URL: &str = "http://127.0.0.1:8000";

/// Client-visible failure of an API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response; carries the server-provided detail message
    Rejected(String),
    /// Request never completed or the response was unreadable
    Connection,
}

/// Error body shape of the backend (`{"detail": "..."}`)
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Build a non-2xx error, preferring the server's detail message
async fn rejection(resp: Response, fallback: &str) -> ApiError {
    classify_rejection(resp.json::<ErrorBody>().await.ok(), fallback)
}

/// A readable body without a detail gets the fallback wording; an
/// unreadable body is treated like any other unparseable response,
/// as a connection failure.
fn classify_rejection(body: Option<ErrorBody>, fallback: &str) -> ApiError {
    match body {
        Some(body) => ApiError::Rejected(body.detail.unwrap_or_else(|| fallback.to_string())),
        None => ApiError::Connection,
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// application/x-www-form-urlencoded body from key/value pairs
pub fn form_encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Task-list endpoint by role: admins see the cross-user set
pub fn tasks_endpoint(role: Role) -> &'static str {
    match role {
        Role::User => "/tasks/",
        Role::Admin => "/admin/tasks",
    }
}

// ========================
// Session Endpoints
// ========================

#[derive(Serialize)]
struct RegisterArgs<'a> {
    username: &'a str,
    password: &'a str,
}

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = form_encode(&[("username", username), ("password", password)]);
    let resp = Request::post(&format!("{API_URL}/login"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|_| ApiError::Connection)?
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    if resp.ok() {
        resp.json().await.map_err(|_| ApiError::Connection)
    } else {
        Err(rejection(resp, "Login failed").await)
    }
}

pub async fn register(username: &str, password: &str) -> Result<(), ApiError> {
    let resp = Request::post(&format!("{API_URL}/register"))
        .json(&RegisterArgs { username, password })
        .map_err(|_| ApiError::Connection)?
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    if resp.ok() {
        Ok(())
    } else {
        Err(rejection(resp, "Registration failed").await)
    }
}

// ========================
// Task Endpoints
// ========================

pub async fn fetch_tasks(token: &str, role: Role) -> Result<Vec<Task>, ApiError> {
    let resp = Request::get(&format!("{}{}", API_URL, tasks_endpoint(role)))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    if resp.ok() {
        resp.json().await.map_err(|_| ApiError::Connection)
    } else {
        Err(rejection(resp, "Failed to fetch tasks").await)
    }
}

pub async fn create_task(token: &str, payload: &TaskPayload<'_>) -> Result<Task, ApiError> {
    let resp = Request::post(&format!("{API_URL}/task/"))
        .header("Authorization", &bearer(token))
        .json(payload)
        .map_err(|_| ApiError::Connection)?
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    if resp.ok() {
        resp.json().await.map_err(|_| ApiError::Connection)
    } else {
        Err(rejection(resp, "Failed to create task").await)
    }
}

pub async fn update_task(token: &str, id: i64, payload: &TaskPayload<'_>) -> Result<Task, ApiError> {
    let resp = Request::put(&format!("{API_URL}/admin/task/{id}"))
        .header("Authorization", &bearer(token))
        .json(payload)
        .map_err(|_| ApiError::Connection)?
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    if resp.ok() {
        resp.json().await.map_err(|_| ApiError::Connection)
    } else {
        Err(rejection(resp, "Task not found").await)
    }
}

pub async fn delete_task(token: &str, id: i64) -> Result<(), ApiError> {
    let resp = Request::delete(&format!("{API_URL}/admin/task/{id}"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    if resp.ok() {
        Ok(())
    } else {
        Err(rejection(resp, "Task not found").await)
    }
}

// ========================
// User Endpoints (admin)
// ========================

pub async fn fetch_users(token: &str) -> Result<Vec<UserAccount>, ApiError> {
    let resp = Request::get(&format!("{API_URL}/admin/users"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    if resp.ok() {
        resp.json().await.map_err(|_| ApiError::Connection)
    } else {
        Err(rejection(resp, "Failed to fetch users").await)
    }
}

pub async fn delete_user(token: &str, id: i64) -> Result<(), ApiError> {
    let resp = Request::delete(&format!("{API_URL}/admin/user/{id}"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    if resp.ok() {
        Ok(())
    } else {
        Err(rejection(resp, "User not found").await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_encode_escapes_reserved_chars() {
        let body = form_encode(&[("username", "alice"), ("password", "p@ss w0rd&1")]);
        assert_eq!(body, "username=alice&password=p%40ss%20w0rd%261");
    }

    #[test]
    fn test_form_encode_plain() {
        assert_eq!(form_encode(&[("username", "bob")]), "username=bob");
    }

    #[test]
    fn test_tasks_endpoint_by_role() {
        assert_eq!(tasks_endpoint(Role::User), "/tasks/");
        assert_eq!(tasks_endpoint(Role::Admin), "/admin/tasks");
    }

    #[test]
    fn test_rejection_prefers_server_detail() {
        let body = ErrorBody { detail: Some("Incorrect username or password".to_string()) };
        assert_eq!(
            classify_rejection(Some(body), "Login failed"),
            ApiError::Rejected("Incorrect username or password".to_string())
        );
    }

    #[test]
    fn test_rejection_without_detail_uses_fallback() {
        let body = ErrorBody { detail: None };
        assert_eq!(
            classify_rejection(Some(body), "Login failed"),
            ApiError::Rejected("Login failed".to_string())
        );
    }

    #[test]
    fn test_unreadable_error_body_is_connection_failure() {
        assert_eq!(classify_rejection(None, "Login failed"), ApiError::Connection);
    }
}

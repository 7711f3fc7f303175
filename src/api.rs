//! HTTP client for the helpdesk backend.
//!
//! One function per endpoint. Authenticated calls attach
//! `Authorization: Bearer <token>`; responses decode into the `dto` types
//! and failures collapse into a displayable message string.

use crate::dto::{CommentDto, LoginDto, LookupDto, Role, TicketDto, UserDto};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

pub const API_URL: &str = "http://localhost:4000";

/// Prefer the backend's own error text when the body carries one.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    format!("request failed with status {status}")
}

async fn send(
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<Response, String> {
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;

    let headers = Headers::new().map_err(|e| format!("headers: {e:?}"))?;
    headers
        .set("Accept", "application/json")
        .map_err(|e| format!("headers: {e:?}"))?;
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|e| format!("headers: {e:?}"))?;
    }

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| format!("headers: {e:?}"))?;
        let text = serde_json::to_string(&body).map_err(|e| e.to_string())?;
        opts.set_body(&JsValue::from_str(&text));
    }
    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(&format!("{API_URL}{path}"), &opts)
        .map_err(|e| format!("request: {e:?}"))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("network error: {e:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch response".to_string())?;

    if !response.ok() {
        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        return Err(error_message(response.status(), &body));
    }
    Ok(response)
}

async fn call<R>(
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Result<R, String>
where
    R: DeserializeOwned,
{
    let response = send(method, path, token, body).await?;
    let json = JsFuture::from(response.json().map_err(|e| format!("body: {e:?}"))?)
        .await
        .map_err(|e| format!("body: {e:?}"))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

pub async fn login(email: &str, password: &str) -> Result<LoginDto, String> {
    call(
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({ "email": email, "password": password })),
    )
    .await
}

pub async fn get_me(token: &str) -> Result<UserDto, String> {
    call("GET", "/auth/me", Some(token), None).await
}

pub async fn get_tickets(token: &str) -> Result<Vec<TicketDto>, String> {
    call("GET", "/tickets", Some(token), None).await
}

pub async fn get_ticket(token: &str, ticket_id: i64) -> Result<TicketDto, String> {
    call("GET", &format!("/tickets/{ticket_id}"), Some(token), None).await
}

pub async fn create_ticket(
    token: &str,
    subject: &str,
    description: &str,
    priority_id: i64,
) -> Result<TicketDto, String> {
    call(
        "POST",
        "/tickets",
        Some(token),
        Some(serde_json::json!({
            "subject": subject,
            "description": description,
            "priority_id": priority_id
        })),
    )
    .await
}

/// Partial update; pass only the fields to change, e.g.
/// `json!({ "status_id": 2 })`.
pub async fn update_ticket(
    token: &str,
    ticket_id: i64,
    patch: serde_json::Value,
) -> Result<TicketDto, String> {
    call("PATCH", &format!("/tickets/{ticket_id}"), Some(token), Some(patch)).await
}

pub async fn delete_ticket(token: &str, ticket_id: i64) -> Result<(), String> {
    send("DELETE", &format!("/tickets/{ticket_id}"), Some(token), None)
        .await
        .map(|_| ())
}

pub async fn get_comments(token: &str, ticket_id: i64) -> Result<Vec<CommentDto>, String> {
    call(
        "GET",
        &format!("/tickets/{ticket_id}/comments"),
        Some(token),
        None,
    )
    .await
}

pub async fn create_comment(
    token: &str,
    ticket_id: i64,
    content: &str,
) -> Result<CommentDto, String> {
    call(
        "POST",
        &format!("/tickets/{ticket_id}/comments"),
        Some(token),
        Some(serde_json::json!({ "content": content })),
    )
    .await
}

pub async fn get_priorities(token: &str) -> Result<Vec<LookupDto>, String> {
    call("GET", "/priorities", Some(token), None).await
}

pub async fn get_statuses(token: &str) -> Result<Vec<LookupDto>, String> {
    call("GET", "/statuses", Some(token), None).await
}

pub async fn get_users(token: &str) -> Result<Vec<UserDto>, String> {
    call("GET", "/users", Some(token), None).await
}

pub async fn create_user(
    token: &str,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<UserDto, String> {
    call(
        "POST",
        "/users",
        Some(token),
        Some(serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
            "role": role.as_str()
        })),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_uses_error_field() {
        assert_eq!(
            error_message(401, r#"{"error":"invalid credentials"}"#),
            "invalid credentials"
        );
    }

    #[test]
    fn error_message_falls_back_to_message_field() {
        assert_eq!(
            error_message(422, r#"{"message":"subject is required"}"#),
            "subject is required"
        );
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(error_message(500, "<html>oops</html>"), "request failed with status 500");
        assert_eq!(error_message(404, ""), "request failed with status 404");
        assert_eq!(
            error_message(403, r#"{"detail":"nope"}"#),
            "request failed with status 403"
        );
    }
}

//! REST API helpers for the authentication endpoints.
//!
//! Thin wrappers over [`crate::net::http`]: each call owns its endpoint
//! path and response decoding, nothing else.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{self, RequestError, RequestResult};
use super::types::{LoginRequest, RegisterRequest, SessionUser};

/// Path prefix for every backend API call.
pub const API_BASE: &str = "/api";

fn auth_endpoint(action: &str) -> String {
    format!("{API_BASE}/auth/{action}")
}

/// Decode a login response body into a [`SessionUser`].
fn parse_session_user(body: serde_json::Value) -> RequestResult<SessionUser> {
    serde_json::from_value(body).map_err(|e| RequestError::Decode(e.to_string()))
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Transport failures per [`RequestError`]; a 2xx body missing user fields
/// is a `Decode` failure.
pub async fn login(credentials: &LoginRequest) -> RequestResult<SessionUser> {
    let body = http::post(&auth_endpoint("login"), credentials).await?;
    parse_session_user(body)
}

/// Sign out via `POST /api/auth/logout`.
///
/// The response carries nothing the client uses; callers typically ignore
/// the outcome and clear local state regardless.
///
/// # Errors
///
/// Transport failures per [`RequestError`].
pub async fn logout() -> RequestResult<serde_json::Value> {
    http::post(&auth_endpoint("logout"), &serde_json::json!({})).await
}

/// Create an online-customer account via `POST /api/auth/register`.
///
/// # Errors
///
/// Transport failures per [`RequestError`]; the success body is discarded.
pub async fn register(details: &RegisterRequest) -> RequestResult<()> {
    http::post(&auth_endpoint("register"), details).await?;
    Ok(())
}

//! Wire DTOs for the authentication REST API.
//!
//! DESIGN
//! ======
//! Field names are camelCase on the wire to match the backend's JSON. The
//! backend serializes numeric user ids, so `userId` accepts either a JSON
//! string or a number and normalizes to `String`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Credentials posted to `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plain-text password; transport security is the deployment's concern.
    pub password: String,
    /// Role the user claims to sign in as (`CASHIER`, `MANAGER`, ...).
    pub user_type: String,
}

/// An authenticated user as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Backend user identifier; arrives as a string or a numeric id.
    #[serde(deserialize_with = "deserialize_string_from_value")]
    pub user_id: String,
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Role value (`CASHIER`, `MANAGER`, `ADMIN`, `ONLINE_CUSTOMER`).
    pub role: String,
}

/// New-account payload posted to `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Contact address; doubles as the login name for online customers.
    pub email: String,
    /// Delivery address.
    pub address: String,
    /// Plain-text password.
    pub password: String,
}

fn deserialize_string_from_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

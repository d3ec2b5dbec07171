use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_session_user() -> SessionUser {
    SessionUser {
        user_id: "1".to_owned(),
        username: "cashier1".to_owned(),
        full_name: "Jane Cashier".to_owned(),
        role: "CASHIER".to_owned(),
    }
}

// =============================================================
// LoginRequest
// =============================================================

#[test]
fn login_request_serializes_with_camel_case_field_names() {
    let request = LoginRequest {
        username: "cashier1".to_owned(),
        password: "secret".to_owned(),
        user_type: "CASHIER".to_owned(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["username"], "cashier1");
    assert_eq!(value["password"], "secret");
    assert_eq!(value["userType"], "CASHIER");
    assert!(value.get("user_type").is_none());
}

// =============================================================
// SessionUser
// =============================================================

#[test]
fn session_user_round_trips() {
    let user = make_session_user();
    let raw = serde_json::to_string(&user).unwrap();
    let back: SessionUser = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}

#[test]
fn session_user_accepts_a_string_user_id() {
    let user: SessionUser = serde_json::from_value(serde_json::json!({
        "userId": "42",
        "username": "mgr",
        "fullName": "Max Manager",
        "role": "MANAGER",
    }))
    .unwrap();
    assert_eq!(user.user_id, "42");
}

#[test]
fn session_user_accepts_a_numeric_user_id() {
    let user: SessionUser = serde_json::from_value(serde_json::json!({
        "userId": 42,
        "username": "mgr",
        "fullName": "Max Manager",
        "role": "MANAGER",
    }))
    .unwrap();
    assert_eq!(user.user_id, "42");
}

#[test]
fn session_user_rejects_a_null_user_id() {
    let result: Result<SessionUser, _> = serde_json::from_value(serde_json::json!({
        "userId": null,
        "username": "mgr",
        "fullName": "Max Manager",
        "role": "MANAGER",
    }));
    assert!(result.is_err());
}

#[test]
fn session_user_rejects_missing_fields() {
    let result: Result<SessionUser, _> = serde_json::from_value(serde_json::json!({
        "userId": 1,
        "username": "mgr",
    }));
    assert!(result.is_err());
}

// =============================================================
// RegisterRequest
// =============================================================

#[test]
fn register_request_round_trips() {
    let request = RegisterRequest {
        name: "Sam Shopper".to_owned(),
        email: "sam@example.com".to_owned(),
        address: "12 Market Street".to_owned(),
        password: "secret".to_owned(),
    };
    let raw = serde_json::to_string(&request).unwrap();
    let back: RegisterRequest = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, request);
}

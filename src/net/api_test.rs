use super::*;

#[test]
fn auth_endpoints_are_rooted_at_the_api_base() {
    assert_eq!(auth_endpoint("login"), "/api/auth/login");
    assert_eq!(auth_endpoint("logout"), "/api/auth/logout");
    assert_eq!(auth_endpoint("register"), "/api/auth/register");
}

#[test]
fn parse_session_user_reads_a_flat_body() {
    let body = serde_json::json!({
        "userId": 1,
        "username": "cashier1",
        "fullName": "Jane Cashier",
        "role": "CASHIER",
    });
    let user = parse_session_user(body).unwrap();
    assert_eq!(user.user_id, "1");
    assert_eq!(user.username, "cashier1");
    assert_eq!(user.full_name, "Jane Cashier");
    assert_eq!(user.role, "CASHIER");
}

#[test]
fn parse_session_user_rejects_a_body_missing_fields() {
    let body = serde_json::json!({
        "userId": 1,
        "username": "cashier1",
    });
    let error = parse_session_user(body).unwrap_err();
    assert!(matches!(error, RequestError::Decode(_)));
}

#[test]
fn parse_session_user_ignores_extra_fields() {
    let body = serde_json::json!({
        "userId": "1",
        "username": "cashier1",
        "fullName": "Jane Cashier",
        "role": "CASHIER",
        "branch": "Colombo",
    });
    assert!(parse_session_user(body).is_ok());
}

use super::*;

// =============================================================
// Method
// =============================================================

#[test]
fn method_wire_names_are_uppercase() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

// =============================================================
// RequestError
// =============================================================

#[test]
fn status_error_message_includes_the_code() {
    assert_eq!(RequestError::Status(401).to_string(), "request failed with status 401");
}

#[test]
fn network_error_message_includes_the_detail() {
    assert_eq!(
        RequestError::Network("connection refused".to_owned()).to_string(),
        "network error: connection refused"
    );
}

#[test]
fn decode_error_message_includes_the_detail() {
    assert_eq!(
        RequestError::Decode("missing field `role`".to_owned()).to_string(),
        "invalid response body: missing field `role`"
    );
}

#[test]
fn timeout_message_is_fixed() {
    assert_eq!(RequestError::Timeout.to_string(), "request timed out");
}

#[test]
fn only_network_and_timeout_are_connectivity_failures() {
    assert!(RequestError::Timeout.is_connectivity());
    assert!(RequestError::Network("offline".to_owned()).is_connectivity());
    assert!(!RequestError::Status(500).is_connectivity());
    assert!(!RequestError::Decode("eof".to_owned()).is_connectivity());
}

#[test]
fn fail_logs_and_returns_the_error_unchanged() {
    let error = fail(Method::Get, "/api/auth/login", RequestError::Timeout);
    assert_eq!(error, RequestError::Timeout);
}

// =============================================================
// Native stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
fn poll_ready<T>(future: impl Future<Output = T>) -> T {
    let mut future = Box::pin(future);
    let mut cx = std::task::Context::from_waker(std::task::Waker::noop());
    match future.as_mut().poll(&mut cx) {
        std::task::Poll::Ready(value) => value,
        std::task::Poll::Pending => panic!("stub future should be immediately ready"),
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn request_reports_a_network_error_off_browser() {
    let result = poll_ready(get("/api/auth/login"));
    assert_eq!(result, Err(RequestError::Network("not available on server".to_owned())));
}

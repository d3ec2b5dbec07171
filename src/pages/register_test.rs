use super::*;

// ============================================================================
// Helpers
// ============================================================================

fn make_form() -> RegisterRequest {
    RegisterRequest {
        name: "Sam Vimes".to_owned(),
        email: "sam@watch.example".to_owned(),
        address: "1 Ramkin Lane".to_owned(),
        password: "secret".to_owned(),
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn complete_form_passes_validation() {
    assert_eq!(validate_form(&make_form()), Ok(()));
}

#[test]
fn each_blank_field_is_reported_by_name() {
    let blank = RegisterRequest {
        name: String::new(),
        email: String::new(),
        address: String::new(),
        password: String::new(),
    };
    assert_eq!(missing_fields(&blank), vec!["name", "email", "address", "password"]);
}

#[test]
fn whitespace_only_password_counts_as_blank() {
    let mut form = make_form();
    form.password = "   ".to_owned();
    assert_eq!(missing_fields(&form), vec!["password"]);
}

#[test]
fn blank_email_reads_as_missing_not_malformed() {
    let mut form = make_form();
    form.email = String::new();
    assert_eq!(validate_form(&form), Err("email is required".to_owned()));
}

#[test]
fn malformed_email_is_rejected_with_its_own_message() {
    let mut form = make_form();
    form.email = "sam.watch.example".to_owned();
    assert_eq!(
        validate_form(&form),
        Err("Please enter a valid email address.".to_owned())
    );
}

// ============================================================================
// Completed-registration handling
// ============================================================================

#[test]
fn successful_registration_yields_the_sign_in_prompt() {
    assert_eq!(handle_register_result(Ok(())), Ok("Account created. Please sign in."));
}

#[test]
fn connectivity_failures_get_the_network_message() {
    let expected = "Network error. Please check your connection and try again.";
    assert_eq!(handle_register_result(Err(RequestError::Timeout)), Err(expected));
    assert_eq!(register_failed_message(&RequestError::Network("offline".to_owned())), expected);
}

#[test]
fn server_rejections_get_the_generic_message() {
    let expected = "Registration failed. Please try again.";
    assert_eq!(handle_register_result(Err(RequestError::Status(409))), Err(expected));
    assert_eq!(register_failed_message(&RequestError::Decode("bad json".to_owned())), expected);
}

use super::*;

fn make_record() -> SessionRecord {
    SessionRecord {
        user_id: "41".to_owned(),
        username: "sam".to_owned(),
        full_name: "Sam Vimes".to_owned(),
        role: "CASHIER".to_owned(),
        login_time: "2025-03-01T09:30:00.000Z".to_owned(),
    }
}

#[test]
fn every_role_gets_its_own_title() {
    assert_eq!(dashboard_title(Role::Cashier), "Cashier Dashboard");
    assert_eq!(dashboard_title(Role::Manager), "Manager Dashboard");
    assert_eq!(dashboard_title(Role::Admin), "Admin Dashboard");
    assert_eq!(dashboard_title(Role::OnlineCustomer), "Customer Dashboard");
}

#[test]
fn identity_line_shows_full_name_and_username() {
    assert_eq!(identity_line(&make_record()), "Sam Vimes (sam)");
}

#[test]
fn signed_in_since_uses_the_short_timestamp() {
    assert_eq!(signed_in_since(&make_record()), "Signed in since 2025-03-01 09:30");
}

#[test]
fn signed_in_since_passes_odd_timestamps_through() {
    let mut record = make_record();
    record.login_time = "just now".to_owned();
    assert_eq!(signed_in_since(&record), "Signed in since just now");
}

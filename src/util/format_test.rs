use super::*;

#[test]
fn iso_timestamp_renders_date_and_minutes() {
    assert_eq!(format_login_time("2025-01-15T09:30:00.000Z"), "2025-01-15 09:30");
}

#[test]
fn seconds_and_timezone_are_dropped() {
    assert_eq!(format_login_time("2025-12-31T23:59:59+05:30"), "2025-12-31 23:59");
}

#[test]
fn non_iso_values_pass_through_unchanged() {
    assert_eq!(format_login_time(""), "");
    assert_eq!(format_login_time("just now"), "just now");
    assert_eq!(format_login_time("2025-01-15"), "2025-01-15");
}

#[test]
fn truncated_time_components_pass_through_unchanged() {
    assert_eq!(format_login_time("2025-01-15T09"), "2025-01-15T09");
    assert_eq!(format_login_time("15/01/2025T09:30"), "15/01/2025T09:30");
}

use super::*;

#[test]
fn banner_windows_match_the_ux_contract() {
    assert_eq!(ERROR_VISIBLE_MS, 5_000);
    assert_eq!(SUCCESS_VISIBLE_MS, 3_000);
}

#[test]
fn show_error_is_visible_immediately() {
    let messages = StatusMessages::new();
    show_error(&messages, "something broke");
    assert_eq!(messages.error.get_untracked(), Some("something broke".to_owned()));
    assert_eq!(messages.success.get_untracked(), None);
}

#[test]
fn show_success_uses_its_own_slot() {
    let messages = StatusMessages::new();
    show_success(&messages, "saved");
    assert_eq!(messages.success.get_untracked(), Some("saved".to_owned()));
    assert_eq!(messages.error.get_untracked(), None);
}

#[test]
fn show_replaces_an_existing_message() {
    let messages = StatusMessages::new();
    show_error(&messages, "first");
    show_error(&messages, "second");
    assert_eq!(messages.error.get_untracked(), Some("second".to_owned()));
}

#[test]
fn clear_error_hides_immediately() {
    let messages = StatusMessages::new();
    show_error(&messages, "stale");
    clear_error(&messages);
    assert_eq!(messages.error.get_untracked(), None);
}

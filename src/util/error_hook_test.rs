#![cfg(not(feature = "hydrate"))]

use leptos::prelude::*;

use super::*;

#[test]
fn install_is_a_noop_off_browser() {
    let messages = StatusMessages::new();
    install(messages);
    assert_eq!(messages.error.get_untracked(), None);
}

//! Status banners with fixed auto-hide windows.
//!
//! DESIGN
//! ======
//! One app-level pair of message slots, provided via context. Hides are
//! fire-and-forget timers, not cancellable handles: a banner shown at T
//! clears at T + window even if another message replaced it in between.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use leptos::prelude::*;

/// How long error banners stay visible.
pub const ERROR_VISIBLE_MS: u64 = 5_000;
/// How long success banners stay visible.
pub const SUCCESS_VISIBLE_MS: u64 = 3_000;

/// App-level banner slots; `None` means hidden.
#[derive(Clone, Copy)]
pub struct StatusMessages {
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Option<String>>,
}

impl StatusMessages {
    pub fn new() -> Self {
        Self { error: RwSignal::new(None), success: RwSignal::new(None) }
    }
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self::new()
    }
}

/// Show `message` in the error slot for [`ERROR_VISIBLE_MS`].
pub fn show_error(messages: &StatusMessages, message: impl Into<String>) {
    show(messages.error, message.into(), ERROR_VISIBLE_MS);
}

/// Show `message` in the success slot for [`SUCCESS_VISIBLE_MS`].
pub fn show_success(messages: &StatusMessages, message: impl Into<String>) {
    show(messages.success, message.into(), SUCCESS_VISIBLE_MS);
}

/// Hide the error banner immediately.
pub fn clear_error(messages: &StatusMessages) {
    messages.error.set(None);
}

fn show(slot: RwSignal<Option<String>>, message: String, visible_ms: u64) {
    slot.set(Some(message));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(visible_ms)).await;
        slot.set(None);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = visible_ms;
}

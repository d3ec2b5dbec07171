//! Last-resort handler for uncaught browser errors.
//!
//! The submit flows report their own failures; this hook only catches what
//! nothing else did (listener callbacks, resource loading), logs the
//! detail, and shows the generic banner so the page stays usable.

#[cfg(test)]
#[path = "error_hook_test.rs"]
mod error_hook_test;

use crate::util::banner::StatusMessages;

/// Message shown for errors nothing handled.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Attach the `window` error listener. Call once at app start.
pub fn install(messages: StatusMessages) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let handler =
            Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(move |event: web_sys::ErrorEvent| {
                leptos::logging::error!("uncaught error: {}", event.message());
                crate::util::banner::show_error(&messages, GENERIC_ERROR_MESSAGE);
            });
        let _ = window.add_event_listener_with_callback("error", handler.as_ref().unchecked_ref());
        // The listener lives for the whole page; leak it.
        handler.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = messages;
    }
}

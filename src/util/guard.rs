//! Session-based route guarding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page load runs one redirect decision before user interaction:
//! signed-in users parked on an entry page move to their dashboard, and
//! signed-out visitors on protected pages move back to the landing page.
//! Route components install the matching effect on mount so client-side
//! navigation obeys the same policy.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionRecord, SessionStore};
use crate::util::routes;

/// Entry pages: where signed-out users sign in.
pub fn is_entry_path(path: &str) -> bool {
    path == routes::LANDING || path == routes::LOGIN
}

/// Pages reachable without a session.
pub fn is_public_path(path: &str) -> bool {
    is_entry_path(path) || path == routes::REGISTER
}

/// The page-load redirect decision.
///
/// Returns the path to navigate to, or `None` to stay put. A computed
/// target equal to the current path is suppressed; without that, a session
/// with an unknown role parked on the landing page would redirect to
/// itself forever.
pub fn redirect_target(session: Option<&SessionRecord>, path: &str) -> Option<&'static str> {
    let logged_in = session.is_some_and(SessionRecord::is_logged_in);
    let target = if logged_in && is_entry_path(path) {
        routes::dashboard_path(session.and_then(SessionRecord::role))
    } else if !logged_in && !is_public_path(path) {
        routes::LANDING
    } else {
        return None;
    };
    (target != path).then_some(target)
}

/// Run the redirect decision once against `location.pathname`.
///
/// Uses a full location change rather than router navigation so the
/// destination page starts from a clean load, the way a served page would.
pub fn install_session_guard(store: SessionStore) {
    Effect::new(move || {
        let Some(path) = current_pathname() else {
            return;
        };
        if let Some(target) = redirect_target(store.get().as_ref(), &path) {
            redirect(target);
        }
    });
}

/// Redirect to the landing page whenever no session is present.
pub fn install_unauth_redirect<F>(store: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !store.is_logged_in() {
            navigate(routes::LANDING, NavigateOptions::default());
        }
    });
}

/// Redirect signed-in users from the login page to their dashboard.
pub fn install_authed_redirect<F>(store: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if store.is_logged_in() {
            navigate(routes::dashboard_path(store.role()), NavigateOptions::default());
        }
    });
}

/// Current `location.pathname`; `None` off-browser.
fn current_pathname() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().pathname().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn redirect(target: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(target);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
    }
}

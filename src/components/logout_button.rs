//! Logout control shared by the dashboards.

#[cfg(test)]
#[path = "logout_button_test.rs"]
mod logout_button_test;

use leptos::prelude::*;

use crate::state::session::SessionStore;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::routes;

/// End the session server-side, then clear local state and name the
/// post-logout destination. Always clears: a dead backend must not leave
/// the terminal looking signed in.
#[cfg(any(test, feature = "hydrate"))]
async fn logout_flow(store: &SessionStore) -> &'static str {
    let _ = crate::net::api::logout().await;
    complete_logout(store)
}

/// Clear local session state; the caller navigates to the returned path.
#[cfg(any(test, feature = "hydrate"))]
fn complete_logout(store: &SessionStore) -> &'static str {
    store.clear();
    routes::LANDING
}

#[component]
pub fn LogoutButton() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let on_logout = move |_| {
        let store = store.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let target = logout_flow(&store).await;
            // Full location change so the landing page loads fresh.
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(target);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = store;
    };

    view! {
        <button class="logout-button" type="button" on:click=on_logout>
            "Logout"
        </button>
    }
}

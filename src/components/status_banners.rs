//! Error and success banners driven by the app-level message slots.

use leptos::prelude::*;

use crate::util::banner::StatusMessages;

/// Render both banner slots. Hidden slots render nothing.
#[component]
pub fn StatusBanners() -> impl IntoView {
    let messages = expect_context::<StatusMessages>();

    view! {
        <Show when=move || messages.error.get().is_some()>
            <div class="banner banner--error" id="errorMessage">
                {move || messages.error.get().unwrap_or_default()}
            </div>
        </Show>
        <Show when=move || messages.success.get().is_some()>
            <div class="banner banner--success" id="successMessage">
                {move || messages.success.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

/// Inline "working" notice for submit flows.
#[component]
pub fn LoadingNotice(when: RwSignal<bool>, label: &'static str) -> impl IntoView {
    view! {
        <Show when=move || when.get()>
            <p class="banner banner--loading" id="loadingMessage">{label}</p>
        </Show>
    }
}

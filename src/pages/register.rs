//! Customer self-registration page.
//!
//! Public in both directions: signed-out visitors reach it from the login
//! page, and a signed-in user who navigates here is left alone. A successful
//! registration routes to the login page with a confirmation banner; the
//! account still has to sign in normally.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::status_banners::{LoadingNotice, StatusBanners};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::http::{RequestError, RequestResult};
use crate::net::types::RegisterRequest;
use crate::util::banner::{self, StatusMessages};
use crate::util::{routes, validate};

/// Success banner shown on the login page after the account is created.
#[cfg(any(test, feature = "hydrate"))]
const REGISTERED_MESSAGE: &str = "Account created. Please sign in.";

/// Required-field check; returns the missing form field names in order.
fn missing_fields(form: &RegisterRequest) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if form.name.trim().is_empty() {
        missing.push("name");
    }
    if form.email.trim().is_empty() {
        missing.push("email");
    }
    if form.address.trim().is_empty() {
        missing.push("address");
    }
    if form.password.trim().is_empty() {
        missing.push("password");
    }
    missing
}

/// Full client-side check. Required fields are reported before email shape,
/// so a blank email reads as missing rather than malformed.
fn validate_form(form: &RegisterRequest) -> Result<(), String> {
    let missing = missing_fields(form);
    if !missing.is_empty() {
        return Err(validate::required_message(&missing));
    }
    if !validate::is_valid_email(&form.email) {
        return Err("Please enter a valid email address.".to_owned());
    }
    Ok(())
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(error: &RequestError) -> &'static str {
    if error.is_connectivity() {
        "Network error. Please check your connection and try again."
    } else {
        "Registration failed. Please try again."
    }
}

/// Map a finished registration call to its banner text: `Ok` carries the
/// success message shown on the login page, `Err` the failure wording.
#[cfg(any(test, feature = "hydrate"))]
fn handle_register_result(result: RequestResult<()>) -> Result<&'static str, &'static str> {
    result.map(|()| REGISTERED_MESSAGE).map_err(|error| register_failed_message(&error))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let messages = expect_context::<StatusMessages>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        banner::clear_error(&messages);

        let form = RegisterRequest {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            address: address.get().trim().to_owned(),
            password: password.get(),
        };
        if let Err(message) = validate_form(&form) {
            banner::show_error(&messages, message);
            return;
        }

        submitting.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match handle_register_result(crate::net::api::register(&form).await) {
                    Ok(message) => {
                        banner::show_success(&messages, message);
                        navigate(routes::LOGIN, NavigateOptions::default());
                    }
                    Err(message) => {
                        submitting.set(false);
                        banner::show_error(&messages, message);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&form, &navigate);
            submitting.set(false);
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Create Account"</h1>
                <p class="register-card__subtitle">"Register as an online customer"</p>
                <StatusBanners/>
                <LoadingNotice when=submitting label="Creating account..."/>
                <form class="register-form" novalidate=true on:submit=on_submit>
                    <input
                        class="register-input"
                        type="text"
                        id="name"
                        name="name"
                        placeholder="Full name"
                        autofocus=true
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="email"
                        id="email"
                        name="email"
                        placeholder="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="text"
                        id="address"
                        name="address"
                        placeholder="Delivery address"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />
                    <input
                        class="register-input"
                        type="password"
                        id="password"
                        name="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="register-button"
                        type="submit"
                        disabled=move || submitting.get()
                    >
                        "Create Account"
                    </button>
                </form>
                <p class="register-card__footer">
                    "Already registered? "
                    <a href=routes::LOGIN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

//! Login page: credential form, validation, submit, role-based redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! One request may be in flight at a time; submits arriving while busy are
//! dropped. A successful login writes the session record before any
//! navigation, so the destination page's guard sees a signed-in state.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::status_banners::{LoadingNotice, StatusBanners};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::http::{RequestError, RequestResult};
use crate::net::types::LoginRequest;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::SessionUser;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::session::SessionRecord;
use crate::state::session::{Role, SessionStore};
use crate::util::banner::{self, StatusMessages};
use crate::util::{guard, routes, validate};

/// Role choices offered by the sign-in form, in display order.
const USER_TYPES: [Role; 4] = [Role::Cashier, Role::Manager, Role::Admin, Role::OnlineCustomer];

/// Required-field check; returns the missing form field names in order.
fn missing_fields(username: &str, password: &str, user_type: &str) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if username.trim().is_empty() {
        missing.push("username");
    }
    if password.trim().is_empty() {
        missing.push("password");
    }
    if user_type.trim().is_empty() {
        missing.push("userType");
    }
    missing
}

/// User-facing failure text; transport detail stays in the console log.
#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(error: &RequestError) -> &'static str {
    if error.is_connectivity() {
        "Network error. Please check your connection and try again."
    } else {
        "Login failed. Please try again."
    }
}

/// Outcome of a completed login attempt.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, PartialEq, Eq)]
enum LoginOutcome {
    /// Session persisted; navigate here.
    Redirect(&'static str),
    /// Show this and return the form to idle.
    Failed(&'static str),
}

/// Apply a finished login call to the session store.
///
/// Failures never touch stored state; a rejected attempt must not disturb
/// an existing session.
#[cfg(any(test, feature = "hydrate"))]
fn handle_login_result(
    store: &SessionStore,
    result: RequestResult<SessionUser>,
    login_time: String,
) -> LoginOutcome {
    match result {
        Ok(user) => {
            let record = SessionRecord::from_login(&user, login_time);
            store.set(&record);
            LoginOutcome::Redirect(routes::dashboard_path(Role::parse(&user.role)))
        }
        Err(error) => LoginOutcome::Failed(login_failed_message(&error)),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let messages = expect_context::<StatusMessages>();
    let navigate = use_navigate();

    guard::install_authed_redirect(store.clone(), navigate.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let user_type = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Drop re-entrant submits while a request is outstanding.
        if submitting.get() {
            return;
        }

        banner::clear_error(&messages);

        let credentials = LoginRequest {
            username: username.get().trim().to_owned(),
            password: password.get(),
            user_type: user_type.get().trim().to_owned(),
        };
        let missing =
            missing_fields(&credentials.username, &credentials.password, &credentials.user_type);
        if !missing.is_empty() {
            banner::show_error(&messages, validate::required_message(&missing));
            return;
        }

        submitting.set(true);
        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&credentials).await;
                let login_time = crate::state::session::now_iso8601();
                match handle_login_result(&store, result, login_time) {
                    LoginOutcome::Redirect(path) => navigate(path, NavigateOptions::default()),
                    LoginOutcome::Failed(message) => {
                        submitting.set(false);
                        banner::show_error(&messages, message);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &credentials;
            submitting.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Point of Sale"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <StatusBanners/>
                <LoadingNotice when=submitting label="Signing in..."/>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        id="username"
                        name="username"
                        placeholder="Username"
                        autofocus=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        id="password"
                        name="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        id="userType"
                        name="userType"
                        prop:value=move || user_type.get()
                        on:change=move |ev| user_type.set(event_target_value(&ev))
                    >
                        <option value="">"Select user type"</option>
                        {USER_TYPES
                            .into_iter()
                            .map(|role| {
                                view! {
                                    <option value=role.as_str()>{role.display_name()}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <button class="login-button" type="submit" disabled=move || submitting.get()>
                        "Sign In"
                    </button>
                </form>
                <p class="login-card__footer">
                    "New customer? "
                    <a href=routes::REGISTER>"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

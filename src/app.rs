//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::dashboard::{
    AdminDashboard, CashierDashboard, CustomerDashboard, ManagerDashboard,
};
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::state::session::SessionStore;
use crate::util::banner::StatusMessages;
use crate::util::{error_hook, guard};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and status banners as contexts, hooks the
/// uncaught-error listener, runs the page-load session guard, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::browser();
    let messages = StatusMessages::new();
    provide_context(store.clone());
    provide_context(messages);

    error_hook::install(messages);
    guard::install_session_guard(store);

    view! {
        <Stylesheet id="leptos" href="/pkg/pos-client.css"/>
        <Title text="Point of Sale"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("cashier") view=CashierDashboard/>
                <Route path=StaticSegment("manager") view=ManagerDashboard/>
                <Route path=StaticSegment("admin") view=AdminDashboard/>
                <Route path=StaticSegment("customer") view=CustomerDashboard/>
            </Routes>
        </Router>
    }
}

//! Role dashboards behind the session guard.
//!
//! All four share one shell: header with identity and logout, status
//! banners, then role-specific panels. The shell re-reads the session in an
//! effect so server-rendered markup stays identical to the first client
//! render and fills in after hydration.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::logout_button::LogoutButton;
use crate::components::status_banners::StatusBanners;
use crate::state::session::{Role, SessionRecord, SessionStore};
use crate::util::{format, guard};

fn dashboard_title(role: Role) -> &'static str {
    match role {
        Role::Cashier => "Cashier Dashboard",
        Role::Manager => "Manager Dashboard",
        Role::Admin => "Admin Dashboard",
        Role::OnlineCustomer => "Customer Dashboard",
    }
}

fn identity_line(record: &SessionRecord) -> String {
    format!("{} ({})", record.full_name, record.username)
}

fn signed_in_since(record: &SessionRecord) -> String {
    format!("Signed in since {}", format::format_login_time(&record.login_time))
}

/// Common dashboard chrome. Installs the signed-out redirect on mount.
#[component]
fn DashboardShell(title: &'static str, children: Children) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    guard::install_unauth_redirect(store.clone(), navigate);

    let session = RwSignal::new(None::<SessionRecord>);
    Effect::new(move || session.set(store.get()));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <div class="dashboard-header__titles">
                    <h1>{title}</h1>
                    <p class="dashboard-header__identity">
                        {move || session.get().map(|record| identity_line(&record))}
                    </p>
                    <p class="dashboard-header__since">
                        {move || session.get().map(|record| signed_in_since(&record))}
                    </p>
                </div>
                <LogoutButton/>
            </header>
            <StatusBanners/>
            <main class="dashboard-panels">{children()}</main>
        </div>
    }
}

#[component]
fn DashboardPanel(heading: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <section class="dashboard-panel">
            <h2>{heading}</h2>
            <p>{blurb}</p>
        </section>
    }
}

#[component]
pub fn CashierDashboard() -> impl IntoView {
    view! {
        <DashboardShell title=dashboard_title(Role::Cashier)>
            <DashboardPanel
                heading="New Sale"
                blurb="Scan items and take payment at the counter."
            />
            <DashboardPanel
                heading="Recent Transactions"
                blurb="Review and reprint receipts from this register."
            />
        </DashboardShell>
    }
}

#[component]
pub fn ManagerDashboard() -> impl IntoView {
    view! {
        <DashboardShell title=dashboard_title(Role::Manager)>
            <DashboardPanel
                heading="Inventory"
                blurb="Track stock levels and reorder from suppliers."
            />
            <DashboardPanel
                heading="Reports"
                blurb="Daily sales totals and staff performance."
            />
        </DashboardShell>
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <DashboardShell title=dashboard_title(Role::Admin)>
            <DashboardPanel
                heading="User Accounts"
                blurb="Create staff accounts and assign roles."
            />
            <DashboardPanel
                heading="System Settings"
                blurb="Store details, tax rates, and receipt layout."
            />
        </DashboardShell>
    }
}

#[component]
pub fn CustomerDashboard() -> impl IntoView {
    view! {
        <DashboardShell title=dashboard_title(Role::OnlineCustomer)>
            <DashboardPanel
                heading="Browse Products"
                blurb="Shop the catalog and add items to your cart."
            />
            <DashboardPanel
                heading="My Orders"
                blurb="Track open orders and view past purchases."
            />
        </DashboardShell>
    }
}

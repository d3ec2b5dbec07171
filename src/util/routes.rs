//! Route paths and role-based destinations.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::Role;

/// Landing page; doubles as the sign-in entry point.
pub const LANDING: &str = "/";
/// Explicit login route (same page as [`LANDING`]).
pub const LOGIN: &str = "/login";
/// Public account-creation page.
pub const REGISTER: &str = "/register";
/// Cashier dashboard.
pub const CASHIER_DASHBOARD: &str = "/cashier";
/// Manager dashboard.
pub const MANAGER_DASHBOARD: &str = "/manager";
/// Admin dashboard.
pub const ADMIN_DASHBOARD: &str = "/admin";
/// Online-customer dashboard.
pub const CUSTOMER_DASHBOARD: &str = "/customer";

/// Where a signed-in user lands. Unknown or missing roles fall back to
/// [`LANDING`].
pub fn dashboard_path(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Cashier) => CASHIER_DASHBOARD,
        Some(Role::Manager) => MANAGER_DASHBOARD,
        Some(Role::Admin) => ADMIN_DASHBOARD,
        Some(Role::OnlineCustomer) => CUSTOMER_DASHBOARD,
        None => LANDING,
    }
}

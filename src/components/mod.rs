//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome (banners, logout control) while reading
//! shared state from Leptos context providers.

pub mod logout_button;
pub mod status_banners;

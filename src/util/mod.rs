//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod banner;
pub mod error_hook;
pub mod format;
pub mod guard;
pub mod routes;
pub mod validate;

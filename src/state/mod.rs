//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session record is the only cross-page model; it lives behind the
//! `SessionStore` capability so pages never touch storage directly.

pub mod session;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, submit flow, its
//! redirect guard) and delegates shared rendering to `components`.

pub mod dashboard;
pub mod login;
pub mod register;

//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns transport defaults and error classification, `api` names the
//! endpoints, and `types` defines the shared wire schema.

pub mod api;
pub mod http;
pub mod types;

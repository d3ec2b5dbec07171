//! Session record and the persistent store behind it.
//!
//! DESIGN
//! ======
//! The signed-in user is tracked client-side as one JSON record under a
//! single `localStorage` key. `SessionStore` wraps that storage behind a
//! small capability object: pages receive it from context, native tests
//! and server rendering swap in an in-memory backend. The record is only
//! ever replaced wholesale or removed wholesale; a payload that fails to
//! parse reads as absent, never as an error.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::net::types::SessionUser;

/// `localStorage` key holding the serialized [`SessionRecord`].
pub const SESSION_KEY: &str = "pos_session";

/// Server-side role of a signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Cashier,
    Manager,
    Admin,
    OnlineCustomer,
}

impl Role {
    /// Parse a wire role value; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "CASHIER" => Some(Self::Cashier),
            "MANAGER" => Some(Self::Manager),
            "ADMIN" => Some(Self::Admin),
            "ONLINE_CUSTOMER" => Some(Self::OnlineCustomer),
            _ => None,
        }
    }

    /// Wire representation, as the backend emits it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cashier => "CASHIER",
            Self::Manager => "MANAGER",
            Self::Admin => "ADMIN",
            Self::OnlineCustomer => "ONLINE_CUSTOMER",
        }
    }

    /// Human-readable name for headings and select options.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Cashier => "Cashier",
            Self::Manager => "Manager",
            Self::Admin => "Admin",
            Self::OnlineCustomer => "Online Customer",
        }
    }
}

/// A signed-in user's session as persisted in the browser.
///
/// Field names stay camelCase on the wire so the stored JSON matches the
/// login response payload it is derived from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Backend user identifier, stored as an opaque string.
    pub user_id: String,
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Raw role value as received; parsed on demand via [`Role::parse`].
    pub role: String,
    /// ISO 8601 timestamp generated when the session was created.
    pub login_time: String,
}

impl SessionRecord {
    /// Build a record from a login response plus the creation timestamp.
    pub fn from_login(user: &SessionUser, login_time: String) -> Self {
        Self {
            user_id: user.user_id.clone(),
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            role: user.role.clone(),
            login_time,
        }
    }

    /// A record counts as signed in only with both a user id and a role.
    pub fn is_logged_in(&self) -> bool {
        !self.user_id.is_empty() && !self.role.is_empty()
    }

    /// Parsed role; `None` for unknown or empty values.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

/// Persistent store for the session record.
///
/// Cloneable capability object provided via Leptos context. Clones share
/// one backend, so any handle observes writes made through another.
#[derive(Clone)]
pub struct SessionStore {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    /// `window.localStorage`; absent storage degrades to reads of `None`
    /// and silently dropped writes.
    Browser,
    /// Process-local slot for native tests and server rendering.
    Memory(Arc<Mutex<Option<String>>>),
}

impl SessionStore {
    /// Store backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self { backend: Backend::Browser }
    }

    /// Store backed by a process-local slot.
    pub fn in_memory() -> Self {
        Self { backend: Backend::Memory(Arc::new(Mutex::new(None))) }
    }

    /// Load the current session; parse failures read as absent.
    pub fn get(&self) -> Option<SessionRecord> {
        let raw = self.read_raw()?;
        serde_json::from_str(&raw).ok()
    }

    /// Persist `record`, replacing any previous session wholesale.
    pub fn set(&self, record: &SessionRecord) {
        let Ok(raw) = serde_json::to_string(record) else {
            return;
        };
        self.write_raw(&raw);
    }

    /// Remove the session. Idempotent. The browser backend also wipes
    /// per-tab `sessionStorage` so no stale screen state survives logout.
    pub fn clear(&self) {
        match &self.backend {
            Backend::Browser => {
                #[cfg(feature = "hydrate")]
                {
                    if let Some(storage) = local_storage() {
                        let _ = storage.remove_item(SESSION_KEY);
                    }
                    if let Some(storage) = session_storage() {
                        let _ = storage.clear();
                    }
                }
            }
            Backend::Memory(slot) => {
                if let Ok(mut slot) = slot.lock() {
                    *slot = None;
                }
            }
        }
    }

    /// Whether a session with both a user id and a role is present.
    pub fn is_logged_in(&self) -> bool {
        self.get().is_some_and(|record| record.is_logged_in())
    }

    /// Parsed role of the current session, if any.
    pub fn role(&self) -> Option<Role> {
        self.get().and_then(|record| record.role())
    }

    fn read_raw(&self) -> Option<String> {
        match &self.backend {
            Backend::Browser => {
                #[cfg(feature = "hydrate")]
                {
                    local_storage()?.get_item(SESSION_KEY).ok().flatten()
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    None
                }
            }
            Backend::Memory(slot) => slot.lock().ok().and_then(|slot| slot.clone()),
        }
    }

    fn write_raw(&self, raw: &str) {
        match &self.backend {
            Backend::Browser => {
                #[cfg(feature = "hydrate")]
                if let Some(storage) = local_storage() {
                    let _ = storage.set_item(SESSION_KEY, raw);
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = raw;
            }
            Backend::Memory(slot) => {
                if let Ok(mut slot) = slot.lock() {
                    *slot = Some(raw.to_owned());
                }
            }
        }
    }
}

/// Current time as an ISO 8601 string from the browser clock.
///
/// Native builds return an empty string; session records are only created
/// in the browser.
pub fn now_iso8601() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

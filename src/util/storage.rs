//! Durable session persistence in browser `localStorage`.
//!
//! Two entries survive reloads: the bearer credential and the role it
//! was issued for. Written on login/signup, read once at app mount,
//! removed at logout. Requires a browser environment; on the server
//! every operation is a no-op.

use crate::state::session::{Role, Session};

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "rollcall_access_token";
#[cfg(feature = "hydrate")]
const ROLE_KEY: &str = "rollcall_role";

/// Read the persisted session, if both entries are present and the
/// role still parses.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let access_token = storage.get_item(TOKEN_KEY).ok()??;
        let role = storage
            .get_item(ROLE_KEY)
            .ok()?
            .and_then(|v| Role::parse(&v))?;
        Some(Session { access_token, role })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `session` for the next page load.
pub fn store(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, &session.access_token);
            let _ = storage.set_item(ROLE_KEY, session.role.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove both entries at logout.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(ROLE_KEY);
        }
    }
}

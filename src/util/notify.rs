//! Blocking user notifications via the browser alert dialog.
//!
//! Success confirmations, the generic authorization failure, and the
//! empty-selection prompts all go through here. No-op on the server.

pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

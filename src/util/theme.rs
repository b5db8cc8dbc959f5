//! Theme initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies it as
//! the `data-theme` attribute on the document element. Toggle writes
//! back to `localStorage` and updates the attribute. Requires a browser
//! environment.

use crate::state::ui::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "rollcall_theme";

/// Read the theme preference from localStorage.
///
/// Falls back to the system `prefers-color-scheme` when no preference
/// is stored.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Theme::Light,
        };

        // Check localStorage first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = Theme::parse(&val) {
                    return theme;
                }
            }
        }

        // Fall back to system preference.
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(Theme::Light, |mq| {
                if mq.matches() { Theme::Dark } else { Theme::Light }
            })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_attr());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.as_attr());
            }
        }
    }
    next
}

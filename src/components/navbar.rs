//! Top navigation bar with brand, role badge, theme toggle, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::state::ui::{Theme, UiState};
use crate::util::{storage, theme};

/// Navigation bar for the dashboard.
///
/// The theme toggle persists the preference; logout clears both the
/// in-memory session and the stored credential before returning to the
/// login route.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let role_label = move || {
        session
            .get()
            .role()
            .map_or_else(String::new, |r| r.as_str().to_owned())
    };

    let on_toggle_theme = move |_| {
        ui.update(|u| u.theme = theme::toggle(u.theme));
    };

    let on_logout = move |_| {
        storage::clear();
        session.update(|s| s.sign_out());
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="navbar">
            <span class="navbar__brand">"Rollcall"</span>
            <span class="navbar__subtitle">"Student Records"</span>
            <span class="navbar__spacer"></span>
            <span class="navbar__role">{role_label}</span>
            <button class="btn navbar__theme" on:click=on_toggle_theme>
                {move || match ui.get().theme {
                    Theme::Light => "Dark mode",
                    Theme::Dark => "Light mode",
                }}
            </button>
            <button class="btn navbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </div>
    }
}

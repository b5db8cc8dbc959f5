//! Dashboard page composing the navbar and the student table.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::student_table::StudentTable;
use crate::net::api::{self, ApiError};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::{storage, theme};

/// Dashboard page.
///
/// Redirects to the login route when no session is present (once the
/// storage restore has run). On mount it probes the legacy unpaged
/// listing: a rejected credential is cleared so the redirect kicks in,
/// any other failure is logged only.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    // The auth pages preview the admin dark look; coming back here the
    // stored preference wins again.
    Effect::new(move || theme::apply(ui.get().theme));

    Effect::new(move || {
        let state = session.get();
        if state.restored && !state.authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    Effect::new(move || {
        let Some(token) = session.get().token().map(ToOwned::to_owned) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::fetch_all_students(&token).await {
                Ok(all) => {
                    leptos::logging::log!("records service reachable, {} students", all.len());
                }
                Err(ApiError::Unauthorized(status)) => {
                    leptos::logging::warn!("stored credential rejected (status {status})");
                    storage::clear();
                    session.update(|s| s.sign_out());
                }
                Err(e) => leptos::logging::warn!("session probe failed: {e}"),
            }
        });
    });

    view! {
        <div class="dashboard-page">
            <Navbar/>
            <StudentTable/>
        </div>
    }
}

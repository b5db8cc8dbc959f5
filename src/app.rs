//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::{editor::EditorState, roster::RosterState, session::SessionState, ui::UiState};
use crate::util::{storage, theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores the persisted session
/// and theme once the browser is up, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState::default());
    let roster = RwSignal::new(RosterState::default());
    let editor = RwSignal::new(EditorState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(roster);
    provide_context(editor);
    provide_context(ui);

    // One-shot restore from localStorage; route guards wait on the
    // `restored` flag before redirecting.
    Effect::new(move || {
        let persisted = storage::load();
        session.update(|s| {
            s.session = persisted;
            s.restored = true;
        });

        let preference = theme::read_preference();
        theme::apply(preference);
        ui.update(|u| u.theme = preference);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/rollcall.css"/>
        <Title text="Rollcall"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}

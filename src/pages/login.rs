//! Login page with the user/admin endpoint toggle.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::LoginRequest;
use crate::state::session::{Role, Session, SessionState};
use crate::state::ui::Theme;
use crate::util::{storage, theme};

/// Login page.
///
/// The toggle switches between the user and admin login endpoints and,
/// purely cosmetically, previews the admin dark look. A successful
/// login persists the credential and role before navigating to the
/// dashboard; any failure shows one generic message and clears the
/// password field.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::User);
    let error = RwSignal::new(None::<String>);

    let on_toggle_role = move |_| {
        let next = role.get_untracked().toggled();
        role.set(next);
        theme::apply(Theme::for_role(next));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let picked = role.get_untracked();
        let creds = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            match api::login(picked, &creds).await {
                Ok(resp) => {
                    storage::store(&Session {
                        access_token: resp.access_token.clone(),
                        role: picked,
                    });
                    session.update(|s| s.sign_in(resp.access_token, picked));
                    error.set(None);
                    navigate("/dashboard", NavigateOptions::default());
                }
                Err(e) => {
                    // Rejected credentials and transport failures read
                    // the same to the user.
                    leptos::logging::warn!("login failed: {e}");
                    error.set(Some("Invalid username or password".to_owned()));
                    password.set(String::new());
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Login"</h1>

                <form on:submit=on_submit>
                    <label class="auth-card__label">
                        "Username"
                        <input
                            class="auth-card__input"
                            type="text"
                            placeholder="Username"
                            required=true
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-card__label">
                        "Password"
                        <input
                            class="auth-card__input"
                            type="password"
                            placeholder="Password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <fieldset class="auth-card__options">
                        <legend>"Login options"</legend>
                        <label
                            class="auth-card__toggle"
                            class:auth-card__toggle--admin=move || role.get() == Role::Admin
                        >
                            <input
                                type="checkbox"
                                prop:checked=move || role.get() == Role::Admin
                                on:change=on_toggle_role
                            />
                            "Admin Login"
                        </label>
                    </fieldset>

                    {move || {
                        error.get().map(|msg| view! { <div class="auth-card__error">{msg}</div> })
                    }}

                    <button class="btn btn--wide" type="submit">
                        "Login"
                    </button>
                </form>

                <a class="auth-card__link" href="/signup">
                    "Sign Up"
                </a>
            </div>
        </div>
    }
}

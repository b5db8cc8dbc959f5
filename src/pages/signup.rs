//! Signup page with the user/admin endpoint toggle.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::SignupRequest;
use crate::state::session::{Role, Session, SessionState};
use crate::state::ui::Theme;
use crate::util::{notify, storage, theme};

/// Signup page.
///
/// Mirrors the login page plus an email field. A successful signup
/// already carries a credential, which is persisted before returning to
/// the login route.
#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
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
        let details = SignupRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
            email: email.get_untracked(),
        };
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            match api::signup(picked, &details).await {
                Ok(resp) => {
                    storage::store(&Session {
                        access_token: resp.access_token.clone(),
                        role: picked,
                    });
                    session.update(|s| s.sign_in(resp.access_token, picked));
                    error.set(None);
                    notify::alert("Sign up successful!");
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    leptos::logging::warn!("signup failed: {e}");
                    error.set(Some("Invalid details".to_owned()));
                    password.set(String::new());
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Sign up"</h1>

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

                    <label class="auth-card__label">
                        "Email"
                        <input
                            class="auth-card__input"
                            type="email"
                            placeholder="email id"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <fieldset class="auth-card__options">
                        <legend>"Signup options"</legend>
                        <label
                            class="auth-card__toggle"
                            class:auth-card__toggle--admin=move || role.get() == Role::Admin
                        >
                            <input
                                type="checkbox"
                                prop:checked=move || role.get() == Role::Admin
                                on:change=on_toggle_role
                            />
                            "Admin Signup"
                        </label>
                    </fieldset>

                    {move || {
                        error.get().map(|msg| view! { <div class="auth-card__error">{msg}</div> })
                    }}

                    <button class="btn btn--wide" type="submit">
                        "Sign up"
                    </button>
                </form>

                <a class="auth-card__link" href="/">
                    "Login"
                </a>
            </div>
        </div>
    }
}

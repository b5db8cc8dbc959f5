use super::*;

// =============================================================
// SessionState lifecycle
// =============================================================

#[test]
fn session_state_default_is_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.authenticated());
    assert!(!state.restored);
    assert!(state.token().is_none());
    assert!(state.role().is_none());
}

#[test]
fn sign_in_installs_token_and_role() {
    let mut state = SessionState::default();
    state.sign_in("tok-1".to_owned(), Role::Admin);

    assert!(state.authenticated());
    assert!(state.restored);
    assert_eq!(state.token(), Some("tok-1"));
    assert_eq!(state.role(), Some(Role::Admin));
}

#[test]
fn sign_out_clears_the_credential() {
    let mut state = SessionState::default();
    state.sign_in("tok-1".to_owned(), Role::User);
    state.sign_out();

    assert!(!state.authenticated());
    assert!(state.token().is_none());
    // The restore already ran; logging out must not un-restore.
    assert!(state.restored);
}

#[test]
fn sign_in_replaces_a_previous_session() {
    let mut state = SessionState::default();
    state.sign_in("old".to_owned(), Role::User);
    state.sign_in("new".to_owned(), Role::Admin);

    assert_eq!(state.token(), Some("new"));
    assert_eq!(state.role(), Some(Role::Admin));
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_round_trips_through_storage_form() {
    assert_eq!(Role::parse(Role::User.as_str()), Some(Role::User));
    assert_eq!(Role::parse(Role::Admin.as_str()), Some(Role::Admin));
    assert_eq!(Role::parse("superuser"), None);
}

#[test]
fn role_toggle_flips_both_ways() {
    assert_eq!(Role::User.toggled(), Role::Admin);
    assert_eq!(Role::Admin.toggled(), Role::User);
}

#[test]
fn role_selects_the_endpoint_variant() {
    assert_eq!(Role::User.login_path(), "/user-login");
    assert_eq!(Role::Admin.login_path(), "/admin-login");
    assert_eq!(Role::User.signup_path(), "/user-signup");
    assert_eq!(Role::Admin.signup_path(), "/admin-signup");
}

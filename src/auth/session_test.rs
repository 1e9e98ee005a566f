use super::*;
use crate::net::types::Role;

fn user(email: &str, role: Role) -> User {
    User {
        user_id: 7,
        full_name: "Test User".to_owned(),
        email: email.to_owned(),
        role,
        address: None,
        phone_number: None,
    }
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = SessionState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn startup_state_is_loading_until_resolved() {
    let state = SessionState::hydrating();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn begin_hydration_adopts_token_and_drops_previous_user() {
    let mut state = SessionState::default();
    state.user = Some(user("old@shop.example", Role::User));
    state.begin_hydration("t1".to_owned());
    assert_eq!(state.token.as_deref(), Some("t1"));
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn successful_hydration_authenticates() {
    let mut state = SessionState::default();
    let started = state.begin_hydration("t1".to_owned());
    assert!(state.finish_hydration(started, Some(user("u@shop.example", Role::User))));
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("t1"));
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("u@shop.example"));
}

#[test]
fn failed_hydration_degrades_to_unauthenticated() {
    let mut state = SessionState::default();
    let started = state.begin_hydration("t1".to_owned());
    assert!(state.finish_hydration(started, None));
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn second_login_discards_first_logins_late_result() {
    let mut state = SessionState::default();
    let first = state.begin_hydration("t1".to_owned());
    let second = state.begin_hydration("t2".to_owned());

    // t1's profile arrives after login(t2) started: must not apply.
    assert!(!state.finish_hydration(first, Some(user("first@shop.example", Role::User))));
    assert!(state.loading);
    assert!(state.user.is_none());

    assert!(state.finish_hydration(second, Some(user("second@shop.example", Role::Admin))));
    assert_eq!(
        state.user.as_ref().map(|u| u.email.as_str()),
        Some("second@shop.example")
    );
}

#[test]
fn logout_discards_in_flight_hydration() {
    let mut state = SessionState::default();
    let started = state.begin_hydration("t1".to_owned());
    state.clear();
    assert!(!state.finish_hydration(started, Some(user("late@shop.example", Role::User))));
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.loading);
}

#[test]
fn clear_is_idempotent() {
    let mut state = SessionState::default();
    state.clear();
    let cleared = state.clone();
    state.clear();
    assert_eq!(state.token, cleared.token);
    assert_eq!(state.user, cleared.user);
    assert_eq!(state.loading, cleared.loading);
}

#[test]
fn stale_failure_does_not_clobber_newer_session() {
    let mut state = SessionState::default();
    let first = state.begin_hydration("t1".to_owned());
    let second = state.begin_hydration("t2".to_owned());
    assert!(state.finish_hydration(second, Some(user("second@shop.example", Role::User))));

    // t1 failing late must not log the t2 session out.
    assert!(!state.finish_hydration(first, None));
    assert_eq!(state.token.as_deref(), Some("t2"));
    assert!(state.user.is_some());
}

// =============================================================
// Claim/profile merge
// =============================================================

#[test]
fn merge_prefers_claims_for_email_and_role() {
    let profile = Profile {
        user_id: 12,
        full_name: Some("Jordan Shopper".to_owned()),
        email: Some("stale@shop.example".to_owned()),
        address: Some("1 Main St".to_owned()),
        phone_number: None,
    };
    let claims = Claims {
        email: "jordan@shop.example".to_owned(),
        role: Role::Admin,
        exp: 4_102_444_800.0,
    };
    let merged = merge_user(profile, &claims);
    assert_eq!(merged.user_id, 12);
    assert_eq!(merged.full_name, "Jordan Shopper");
    assert_eq!(merged.email, "jordan@shop.example");
    assert_eq!(merged.role, Role::Admin);
    assert_eq!(merged.address.as_deref(), Some("1 Main St"));
}

#[test]
fn merge_tolerates_sparse_profiles() {
    let claims = Claims {
        email: "jordan@shop.example".to_owned(),
        role: Role::User,
        exp: 4_102_444_800.0,
    };
    let merged = merge_user(Profile::default(), &claims);
    assert_eq!(merged.full_name, "");
    assert_eq!(merged.email, "jordan@shop.example");
}

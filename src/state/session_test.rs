use super::*;
use crate::net::types::Role;

fn admin() -> UserProfile {
    UserProfile {
        email: "admin@example.com".to_owned(),
        full_name: "Admin".to_owned(),
        role: Role::Admin,
        is_active: true,
        created_at: "2024-01-01".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_starts_loading_with_no_user() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.epoch, 0);
}

// =============================================================
// restore_plan
// =============================================================

#[test]
fn restore_plan_restores_when_token_and_cache_present() {
    assert_eq!(restore_plan(true, Some(admin())), RestorePlan::Restore(admin()));
}

#[test]
fn restore_plan_clears_without_token() {
    assert_eq!(restore_plan(false, Some(admin())), RestorePlan::ClearStale);
}

#[test]
fn restore_plan_clears_without_cached_user() {
    assert_eq!(restore_plan(true, None), RestorePlan::ClearStale);
}

#[test]
fn restore_plan_clears_when_both_absent() {
    assert_eq!(restore_plan(false, None), RestorePlan::ClearStale);
}

// =============================================================
// Transitions and the epoch guard
// =============================================================

#[test]
fn login_success_sets_user_and_bumps_epoch() {
    let mut state = SessionState::default();
    apply_login_success(&mut state, admin());
    assert_eq!(state.user.as_ref().map(|u| u.full_name.as_str()), Some("Admin"));
    assert_eq!(state.epoch, 1);
}

#[test]
fn logout_clears_user_and_bumps_epoch() {
    let mut state = SessionState::default();
    apply_login_success(&mut state, admin());
    apply_logout(&mut state);
    assert!(state.user.is_none());
    assert_eq!(state.epoch, 2);
}

#[test]
fn background_result_applies_while_epoch_current() {
    let state = SessionState::default();
    assert!(background_result_applies(&state, 0));
}

#[test]
fn stale_background_result_is_discarded_after_logout() {
    let mut state = SessionState::default();
    let spawn_epoch = state.epoch;
    apply_logout(&mut state);
    assert!(!background_result_applies(&state, spawn_epoch));
}

#[test]
fn stale_background_result_is_discarded_after_relogin() {
    let mut state = SessionState::default();
    let spawn_epoch = state.epoch;
    apply_logout(&mut state);
    apply_login_success(&mut state, admin());
    assert!(!background_result_applies(&state, spawn_epoch));
}

// =============================================================
// is_authenticated
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn cached_user_without_token_is_not_authenticated() {
    // Off-browser the token store is always empty, so even a present
    // in-memory user must not gate as authenticated.
    let mut state = SessionState::default();
    apply_login_success(&mut state, admin());
    assert!(!is_authenticated(&state));
}

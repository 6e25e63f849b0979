//! Auth-session state and lifecycle for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<SessionState>` from the composition root; route
//! guards and user-aware components read it, forms call the operations
//! below. The persisted side of the session lives in `util::storage`; this
//! module owns the in-memory mirror.
//!
//! DESIGN
//! ======
//! Initialization restores optimistically from cache so the UI renders
//! "logged in" without a round trip, then re-verifies in the background.
//! Background results apply only while the epoch they were spawned under is
//! still current, so a stale verification can never clobber a newer
//! login/logout. Background-verify failure deliberately does NOT roll back
//! the optimistic state (a stale session beats a forced re-login on a flaky
//! network), while a `refresh_user` failure DOES force logout — that
//! asymmetry is observed product behavior, kept as-is.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::auth;
use crate::net::error::AuthError;
use crate::net::types::{Credentials, RegisterData, UserProfile};
use crate::state::toasts::{self, ToastState};

/// In-memory session mirror.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// Current profile; may lag the backend while verification is in
    /// flight.
    pub user: Option<UserProfile>,
    /// True from first mount until initialization completes, and during
    /// login/logout.
    pub loading: bool,
    /// Bumped on every login/logout; background tasks apply their result
    /// only when the epoch they captured is still current.
    pub epoch: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true, epoch: 0 }
    }
}

/// What initialization should do, decided purely from the persisted slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RestorePlan {
    /// Token and cached profile both present: render logged-in immediately,
    /// verify in the background.
    Restore(UserProfile),
    /// Anything less: scrub partial/stale slots before finishing init.
    ClearStale,
}

pub(crate) fn restore_plan(token_present: bool, cached_user: Option<UserProfile>) -> RestorePlan {
    match cached_user {
        Some(user) if token_present => RestorePlan::Restore(user),
        _ => RestorePlan::ClearStale,
    }
}

/// Consumer-facing authentication gate: an in-memory user AND a stored
/// token. A cached-but-unconfirmed user still renders as authenticated.
pub fn is_authenticated(state: &SessionState) -> bool {
    state.user.is_some() && auth::is_authenticated()
}

pub(crate) fn apply_login_success(state: &mut SessionState, user: UserProfile) {
    state.user = Some(user);
    state.epoch += 1;
}

pub(crate) fn apply_logout(state: &mut SessionState) {
    state.user = None;
    state.epoch += 1;
}

/// Whether a background result spawned under `spawn_epoch` may still be
/// applied.
pub(crate) fn background_result_applies(state: &SessionState, spawn_epoch: u64) -> bool {
    state.epoch == spawn_epoch
}

/// Initialize session state on first mount: optimistic restore from cache
/// plus fire-and-forget re-verification, or a full clear of stale slots.
/// Always ends with `loading == false`.
pub async fn initialize(session: RwSignal<SessionState>) {
    match restore_plan(auth::is_authenticated(), auth::get_stored_user()) {
        RestorePlan::Restore(user) => {
            let spawn_epoch = session.get_untracked().epoch;
            session.update(|s| s.user = Some(user));
            spawn_background_verify(session, spawn_epoch);
        }
        RestorePlan::ClearStale => {
            auth::logout().await;
        }
    }
    session.update(|s| s.loading = false);
}

fn spawn_background_verify(session: RwSignal<SessionState>, spawn_epoch: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match auth::get_current_user().await {
            Ok(user) => {
                if background_result_applies(&session.get_untracked(), spawn_epoch) {
                    session.update(|s| s.user = Some(user));
                }
            }
            // Never regress the optimistic state on failure.
            Err(err) => log::warn!("background token verification failed: {err}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, spawn_epoch);
    }
}

/// Log in and surface the outcome as a toast. The error is re-thrown so the
/// form can keep its inline message; the loading flag clears either way.
///
/// # Errors
///
/// Propagates the auth service failure verbatim.
pub async fn login(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    credentials: Credentials,
) -> Result<(), AuthError> {
    session.update(|s| s.loading = true);
    let result = auth::login(&credentials).await;
    match &result {
        Ok((user, _tokens)) => {
            let user = user.clone();
            toasts::push_success(toasts, format!("Bem-vindo, {}!", user.full_name));
            session.update(|s| apply_login_success(s, user));
        }
        Err(err) => toasts::push_error(toasts, err.to_string()),
    }
    session.update(|s| s.loading = false);
    result.map(|_| ())
}

/// Register a new account and log it in; same toast/loading contract as
/// [`login`].
///
/// # Errors
///
/// Propagates the auth service failure verbatim.
pub async fn register(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    data: RegisterData,
) -> Result<(), AuthError> {
    session.update(|s| s.loading = true);
    let result = auth::register(&data).await;
    match &result {
        Ok((user, _tokens)) => {
            let user = user.clone();
            toasts::push_success(toasts, format!("Bem-vindo, {}!", user.full_name));
            session.update(|s| apply_login_success(s, user));
        }
        Err(err) => toasts::push_error(toasts, err.to_string()),
    }
    session.update(|s| s.loading = false);
    result.map(|_| ())
}

/// Log out. The in-memory user clears before the backend call so the UI
/// reacts immediately; the backend call never fails (per the auth service),
/// so this always succeeds and always toasts success.
pub async fn logout(session: RwSignal<SessionState>, toasts: RwSignal<ToastState>) {
    session.update(|s| {
        apply_logout(s);
        s.loading = true;
    });
    auth::logout().await;
    session.update(|s| s.loading = false);
    toasts::push_success(toasts, "Logout realizado com sucesso");
}

/// Re-fetch and overwrite the in-memory profile. Unlike initialization, a
/// failure here cascades into a full logout.
pub async fn refresh_user(session: RwSignal<SessionState>, toasts: RwSignal<ToastState>) {
    if !auth::is_authenticated() {
        return;
    }
    match auth::get_current_user().await {
        Ok(user) => session.update(|s| s.user = Some(user)),
        Err(err) => {
            log::warn!("failed to refresh user: {err}");
            logout(session, toasts).await;
        }
    }
}

//! Authentication service: session endpoints and token persistence.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning errors, since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (network, abort-by-timeout, non-2xx, missing token)
//! surfaces as [`AuthError`] distinguished only by its message. `logout` is
//! the exception: it never fails — the backend call is best-effort and local
//! state is always cleared.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::AuthError;
use super::types::{AuthTokens, CreateUserData, Credentials, RegisterData, UserProfile};
use crate::util::storage;

/// The backend logout call is abandoned after this long; local clearing
/// proceeds regardless.
#[cfg(feature = "hydrate")]
const LOGOUT_TIMEOUT_MS: u32 = 3_000;
/// Profile fetches hang at most this long before aborting.
#[cfg(feature = "hydrate")]
const CURRENT_USER_TIMEOUT_MS: u32 = 5_000;

pub(crate) const NO_TOKEN_MESSAGE: &str = "No access token available";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const USER_FETCH_FAILED_MESSAGE: &str = "Failed to get user information";

fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// `Authorization` header pairs for the stored token; empty when logged out.
pub fn auth_headers() -> Vec<(&'static str, String)> {
    match storage::access_token() {
        Some(token) => vec![("Authorization", bearer_value(&token))],
        None => Vec::new(),
    }
}

/// Access token present in storage. The service-level authentication
/// predicate depends only on token presence, never on profile freshness.
pub fn is_authenticated() -> bool {
    storage::access_token().is_some()
}

/// Cached profile from the last successful fetch; `None` when absent or
/// malformed.
pub fn get_stored_user() -> Option<UserProfile> {
    storage::stored_user()
}

/// Exchange credentials for a token pair, then fetch and cache the profile.
///
/// The two steps are atomic from the caller's view: if the profile fetch
/// fails after the tokens were persisted, the stored pair is cleared and the
/// login fails.
///
/// # Errors
///
/// Fails with the server's `detail` message on a rejected login, or a
/// generic message when the body is unusable.
pub async fn login(credentials: &Credentials) -> Result<(UserProfile, AuthTokens), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let tokens = issue_tokens("/api/auth/login", credentials, "Login failed").await?;
        finish_session(tokens).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(AuthError::new("not available on server"))
    }
}

/// Create an account and log it in, with the same two-step pattern and
/// error handling as [`login`].
///
/// # Errors
///
/// Fails with the server's `detail` message on a rejected registration.
pub async fn register(data: &RegisterData) -> Result<(UserProfile, AuthTokens), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let tokens = issue_tokens("/api/auth/register", data, "Registration failed").await?;
        finish_session(tokens).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        Err(AuthError::new("not available on server"))
    }
}

/// Invalidate the session. The backend call is attempted only when a token
/// exists, bounded by a 3-second abort, and any failure is logged and
/// swallowed; the local slots are always cleared. Never fails.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = storage::access_token() {
            let guard = super::AbortTimeout::new(LOGOUT_TIMEOUT_MS);
            let mut request = gloo_net::http::Request::post(&super::api_url("/api/auth/logout"))
                .header("Authorization", &bearer_value(&token));
            if let Some(guard) = &guard {
                request = request.abort_signal(Some(&guard.signal()));
            }
            if let Err(err) = request.send().await {
                log::warn!("logout request failed: {err}");
            }
        }
    }
    storage::clear_session();
}

/// Fetch the current profile from `/api/auth/me`, bounded by a 5-second
/// abort.
///
/// # Errors
///
/// Fails immediately — zero network calls — when no token is stored, and
/// with [`USER_FETCH_FAILED_MESSAGE`] on a non-2xx response.
pub async fn get_current_user() -> Result<UserProfile, AuthError> {
    let Some(token) = storage::access_token() else {
        return Err(AuthError::new(NO_TOKEN_MESSAGE));
    };
    #[cfg(feature = "hydrate")]
    {
        let guard = super::AbortTimeout::new(CURRENT_USER_TIMEOUT_MS);
        let mut request = gloo_net::http::Request::get(&super::api_url("/api/auth/me"))
            .header("Authorization", &bearer_value(&token));
        if let Some(guard) = &guard {
            request = request.abort_signal(Some(&guard.signal()));
        }
        let resp = request
            .send()
            .await
            .map_err(|err| AuthError::new(err.to_string()))?;
        if !resp.ok() {
            return Err(AuthError::new(USER_FETCH_FAILED_MESSAGE));
        }
        resp.json::<UserProfile>()
            .await
            .map_err(|err| AuthError::new(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(AuthError::new("not available on server"))
    }
}

/// Provision a new account (admin only) via `POST /api/auth/create-user`.
///
/// # Errors
///
/// Fails when no token is stored or the server rejects the request.
pub async fn create_user(data: &CreateUserData) -> Result<UserProfile, AuthError> {
    let Some(token) = storage::access_token() else {
        return Err(AuthError::new(NO_TOKEN_MESSAGE));
    };
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&super::api_url("/api/auth/create-user"))
            .header("Authorization", &bearer_value(&token))
            .json(data)
            .map_err(|err| AuthError::new(err.to_string()))?
            .send()
            .await
            .map_err(|err| AuthError::new(err.to_string()))?;
        if !resp.ok() {
            return Err(AuthError::new(
                super::error_detail(resp, "Failed to create user").await,
            ));
        }
        resp.json::<UserProfile>()
            .await
            .map_err(|err| AuthError::new(err.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, data);
        Err(AuthError::new("not available on server"))
    }
}

/// POST a credential payload and decode the issued token pair.
#[cfg(feature = "hydrate")]
async fn issue_tokens<B: serde::Serialize>(
    endpoint: &str,
    body: &B,
    fallback: &str,
) -> Result<AuthTokens, AuthError> {
    let resp = gloo_net::http::Request::post(&super::api_url(endpoint))
        .json(body)
        .map_err(|err| AuthError::new(err.to_string()))?
        .send()
        .await
        .map_err(|err| AuthError::new(err.to_string()))?;
    if !resp.ok() {
        return Err(AuthError::new(super::error_detail(resp, fallback).await));
    }
    resp.json::<AuthTokens>()
        .await
        .map_err(|err| AuthError::new(err.to_string()))
}

/// Persist the token pair, then fetch and cache the profile. Clears the
/// pair again when the profile fetch fails, keeping login atomic.
#[cfg(feature = "hydrate")]
async fn finish_session(tokens: AuthTokens) -> Result<(UserProfile, AuthTokens), AuthError> {
    storage::set_tokens(&tokens);
    match get_current_user().await {
        Ok(user) => {
            storage::set_stored_user(&user);
            Ok((user, tokens))
        }
        Err(err) => {
            storage::clear_session();
            Err(err)
        }
    }
}

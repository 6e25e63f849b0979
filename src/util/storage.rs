//! Browser localStorage helpers and the persisted session slots.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three independent string slots hold the bearer session (access token,
//! refresh token, serialized user profile); they are written on login and
//! cleared as a group on logout. A fourth slot holds the download history.
//! Tokens are opaque strings; nothing here inspects their contents.
//!
//! Storage survives page reloads but not a private-browsing wipe, and is
//! never shared across devices. SSR paths read and write nothing.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::{AuthTokens, UserProfile};

pub(crate) const ACCESS_TOKEN_KEY: &str = "ja_access_token";
pub(crate) const REFRESH_TOKEN_KEY: &str = "ja_refresh_token";
pub(crate) const USER_KEY: &str = "ja_user";

/// Read a raw string from `localStorage` for `key`.
pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a raw string to `localStorage` for `key`.
pub fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a key from `localStorage`.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Load a JSON value from `localStorage` for `key`.
///
/// Returns `None` when the slot is absent or holds malformed data.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_item(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    set_item(key, &raw);
}

/// Stored access token, if any.
pub fn access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY)
}

/// Stored refresh token, if any. Not exercised by any current call path;
/// persisted so a future token-rotation flow can pick it up.
pub fn refresh_token() -> Option<String> {
    get_item(REFRESH_TOKEN_KEY)
}

/// Persist a token pair returned by login/registration.
pub fn set_tokens(tokens: &AuthTokens) {
    set_item(ACCESS_TOKEN_KEY, &tokens.access_token);
    set_item(REFRESH_TOKEN_KEY, &tokens.refresh_token);
}

/// Cached user profile, if present and well-formed.
pub fn stored_user() -> Option<UserProfile> {
    load_json(USER_KEY)
}

/// Cache the user profile alongside the tokens.
pub fn set_stored_user(user: &UserProfile) {
    save_json(USER_KEY, user);
}

/// Clear all three session slots as a group.
pub fn clear_session() {
    remove_item(ACCESS_TOKEN_KEY);
    remove_item(REFRESH_TOKEN_KEY);
    remove_item(USER_KEY);
}

#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn bearer_value_formats_header() {
    assert_eq!(bearer_value("abc123"), "Bearer abc123");
}

#[test]
fn user_fetch_failure_message_is_stable() {
    // Callers branch on message text; the literal is part of the contract.
    assert_eq!(USER_FETCH_FAILED_MESSAGE, "Failed to get user information");
}

#[test]
fn auth_headers_empty_without_token() {
    assert!(auth_headers().is_empty());
}

#[test]
fn is_authenticated_false_without_token() {
    assert!(!is_authenticated());
}

#[test]
fn stored_user_absent_without_session() {
    assert!(get_stored_user().is_none());
}

#[test]
fn get_current_user_rejects_without_token_and_without_network() {
    // Off-browser there is no token slot, so the precondition must fail
    // before any request machinery is touched.
    let result = futures::executor::block_on(get_current_user());
    assert_eq!(result.unwrap_err().to_string(), NO_TOKEN_MESSAGE);
}

#[test]
fn create_user_requires_token_first() {
    use crate::net::types::{CreateUserData, Role};
    let data = CreateUserData {
        email: "nova@example.com".to_owned(),
        full_name: "Nova Conta".to_owned(),
        password: "Secret123".to_owned(),
        role: Role::User,
    };
    let result = futures::executor::block_on(create_user(&data));
    assert_eq!(result.unwrap_err().to_string(), NO_TOKEN_MESSAGE);
}

#[test]
fn logout_always_resolves() {
    futures::executor::block_on(logout());
    assert!(!is_authenticated());
}

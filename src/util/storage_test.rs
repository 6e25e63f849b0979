#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn session_slots_use_distinct_keys() {
    assert_ne!(ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY);
    assert_ne!(ACCESS_TOKEN_KEY, USER_KEY);
    assert_ne!(REFRESH_TOKEN_KEY, USER_KEY);
}

#[test]
fn non_hydrate_storage_reads_nothing() {
    assert!(get_item(ACCESS_TOKEN_KEY).is_none());
    assert!(access_token().is_none());
    assert!(refresh_token().is_none());
    assert!(stored_user().is_none());
}

#[test]
fn non_hydrate_storage_writes_are_noops_but_callable() {
    set_item(ACCESS_TOKEN_KEY, "tok");
    remove_item(ACCESS_TOKEN_KEY);
    clear_session();
    assert!(access_token().is_none());
}

#[test]
fn load_json_returns_none_for_missing_slot() {
    let value: Option<Vec<String>> = load_json("ja_missing");
    assert!(value.is_none());
}

//! End-to-end flows a request-handling layer would drive: register, log in,
//! shorten, and enforce ownership across accounts.

use tinylink_core::auth::{self, AuthError};
use tinylink_core::codegen::CodeGenerator;
use tinylink_core::store::{Store, StoreError};

#[test]
fn full_session_flow() {
    let mut store = Store::new();
    let gen = CodeGenerator::default();

    let account = auth::register(&mut store, &gen, "a@x.com", "pw1").unwrap();
    let identity = auth::authenticate(&store, "a@x.com", "pw1").unwrap().user_id;
    assert_eq!(identity, account.user_id);

    let first = store.create_link("http://example.com", &identity, &gen).unwrap();
    let second = store.create_link("http://example.org", &identity, &gen).unwrap();
    assert_eq!(store.list_owned(&identity).len(), 2);

    store
        .update_link(&first.short_code, "http://example.net", &identity)
        .unwrap();
    assert_eq!(
        store.get_link(&first.short_code).unwrap().long_url,
        "http://example.net"
    );

    store.delete_link(&second.short_code, &identity).unwrap();
    assert!(store.get_link(&second.short_code).is_none());
    assert_eq!(store.list_owned(&identity).len(), 1);
}

#[test]
fn duplicate_registration_keeps_the_first_account() {
    let mut store = Store::new();
    let gen = CodeGenerator::default();

    auth::register(&mut store, &gen, "a@x.com", "first-password").unwrap();
    assert_eq!(
        auth::register(&mut store, &gen, "a@x.com", "second-password"),
        Err(AuthError::Store(StoreError::DuplicateEmail))
    );

    // Only the first password works, so the first hash is the one stored.
    assert!(auth::authenticate(&store, "a@x.com", "first-password").is_ok());
    assert_eq!(
        auth::authenticate(&store, "a@x.com", "second-password"),
        Err(AuthError::InvalidCredential)
    );
}

#[test]
fn foreign_account_cannot_touch_a_link() {
    let mut store = Store::new();
    let gen = CodeGenerator::default();

    let owner = auth::register(&mut store, &gen, "owner@x.com", "pw").unwrap();
    let other = auth::register(&mut store, &gen, "other@x.com", "pw").unwrap();

    store.put_link("abc123", "http://example.com", &owner.user_id);

    assert_eq!(
        store.update_link("abc123", "http://new.com", &other.user_id),
        Err(StoreError::Unauthorized)
    );
    assert_eq!(
        store.delete_link("abc123", &other.user_id),
        Err(StoreError::Unauthorized)
    );
    assert_eq!(store.get_link("abc123").unwrap().long_url, "http://example.com");

    // The other account sees none of the owner's links.
    assert!(store.list_owned(&other.user_id).is_empty());
}

#[test]
fn delete_of_missing_code_reports_not_found() {
    let mut store = Store::new();
    assert_eq!(store.delete_link("missing", "user_1"), Err(StoreError::NotFound));
}

#[test]
fn example_accounts_can_log_in_and_manage_their_links() {
    let mut store = Store::with_example_data();
    let demo = auth::authenticate(&store, "user@example.com", "purple-monkey-dinosaur").unwrap();

    store
        .update_link("b2xVn2", "http://www.lighthouselabs.ca/about", &demo.user_id)
        .unwrap();
    assert_eq!(
        store.get_link("b2xVn2").unwrap().long_url,
        "http://www.lighthouselabs.ca/about"
    );

    // The second demo account still owns its own link, untouched.
    assert_eq!(
        store.update_link("9sm5xK", "http://elsewhere.com", &demo.user_id),
        Err(StoreError::Unauthorized)
    );
}

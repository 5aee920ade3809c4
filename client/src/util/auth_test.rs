use std::sync::Arc;

use super::*;
use crate::state::session::{AcceptAnyCredentials, REDIRECT_KEY};
use crate::util::storage::{KeyValueStore, MemoryStorage};

fn session_with(store: &MemoryStorage) -> Session {
    Session::new(Arc::new(store.clone()), Arc::new(AcceptAnyCredentials))
}

#[test]
fn unauthenticated_navigation_is_refused_and_remembered() {
    let store = MemoryStorage::new();
    let session = session_with(&store);
    assert!(!check_navigation(&session, "/products", "?region=Kerala"));
    assert_eq!(store.get(REDIRECT_KEY).as_deref(), Some("/products?region=Kerala"));
}

#[test]
fn authenticated_navigation_is_allowed_without_touching_redirect() {
    let store = MemoryStorage::new();
    let session = session_with(&store);
    session.login("a@b.c", "pw").unwrap();
    assert!(check_navigation(&session, "/map", ""));
    assert_eq!(store.get(REDIRECT_KEY), None);
}

#[test]
fn visit_then_login_returns_to_the_same_path() {
    let store = MemoryStorage::new();
    let session = session_with(&store);
    assert!(!check_navigation(&session, "/products/abc123", ""));
    session.login("a@b.c", "pw").unwrap();
    assert_eq!(session.take_redirect_target(), "/products/abc123");
    assert!(check_navigation(&session, "/products/abc123", ""));
}

#[test]
fn logout_makes_next_visit_redirect_again() {
    let store = MemoryStorage::new();
    let session = session_with(&store);
    session.login("a@b.c", "pw").unwrap();
    session.logout();
    assert!(!check_navigation(&session, "/upload", ""));
}

#[test]
fn guard_redirects_replace_history() {
    assert!(replace_options().replace);
}

use std::sync::Arc;

use super::*;
use crate::state::session::{AcceptAnyCredentials, REDIRECT_KEY};
use crate::util::storage::{KeyValueStore, MemoryStorage};

fn session(store: &MemoryStorage) -> Session {
    Session::new(Arc::new(store.clone()), Arc::new(AcceptAnyCredentials))
}

#[test]
fn login_returns_remembered_path_and_clears_it() {
    let store = MemoryStorage::new();
    let session = session(&store);
    session.remember_redirect("/map?lat=17.385&lng=78.4867");
    let target = complete_login(&session, "artisan@example.com", "secret").unwrap();
    assert_eq!(target, "/map?lat=17.385&lng=78.4867");
    assert_eq!(store.get(REDIRECT_KEY), None);
    assert!(session.is_authenticated());
    assert_eq!(session.email().as_deref(), Some("artisan@example.com"));
}

#[test]
fn login_without_remembered_path_lands_home() {
    let store = MemoryStorage::new();
    let target = complete_login(&session(&store), "a@b.c", "pw").unwrap();
    assert_eq!(target, "/");
}

#[test]
fn refused_login_keeps_remembered_path() {
    let store = MemoryStorage::new();
    let session = session(&store);
    session.remember_redirect("/upload");
    assert_eq!(complete_login(&session, "", "pw"), Err(LoginError::MissingCredentials));
    assert!(!session.is_authenticated());
    assert_eq!(store.get(REDIRECT_KEY).as_deref(), Some("/upload"));
}

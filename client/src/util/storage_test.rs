use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("k"), None);

    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));

    store.set("k", "w");
    assert_eq!(store.get("k").as_deref(), Some("w"));
    assert_eq!(store.get("other"), None);

    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn memory_storage_clones_share_entries() {
    let one = MemoryStorage::new();
    let two = one.clone();
    one.set("shared", "yes");
    assert_eq!(two.get("shared").as_deref(), Some("yes"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_outside_the_browser() {
    let store = BrowserStorage;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
    store.remove("k");
}

use super::*;

#[test]
fn epoch_starts_at_zero_and_bumps() {
    let mut epoch = NavigationEpoch::default();
    assert_eq!(epoch.count, 0);
    epoch.bump();
    epoch.bump();
    assert_eq!(epoch.count, 2);
}

#[test]
fn link_path_strips_query_and_fragment() {
    assert_eq!(link_path("/map?lat=1&lng=2"), Some("/map"));
    assert_eq!(link_path("/about#team"), Some("/about"));
    assert_eq!(link_path("/"), Some("/"));
}

#[test]
fn link_path_ignores_external_links() {
    assert_eq!(link_path("https://www.openstreetmap.org/copyright"), None);
    assert_eq!(link_path("//cdn.example/x"), None);
    assert_eq!(link_path("mailto:artisan@example.com"), None);
    assert_eq!(link_path(""), None);
}

#[test]
fn same_page_link_reenters() {
    assert!(reenters_current_page("/map", "/map"));
    assert!(reenters_current_page("/map", "/map?lat=17.385&lng=78.4867"));
    assert!(reenters_current_page("/products", "/products/"));
    assert!(reenters_current_page("/", "/"));
}

#[test]
fn other_page_link_does_not_reenter() {
    assert!(!reenters_current_page("/map", "/products"));
    assert!(!reenters_current_page("/products", "/products/abc"));
    assert!(!reenters_current_page("/", "/about"));
    assert!(!reenters_current_page("/map", "https://tile.openstreetmap.org/"));
}

use super::*;
use crate::net::types::Location;

fn located(id: &str, lat: Option<f64>, lng: Option<f64>) -> Product {
    Product {
        id: id.to_owned(),
        name: format!("Product {id}"),
        location: Some(Location {
            latitude: lat,
            longitude: lng,
        }),
        ..Product::default()
    }
}

fn region(name: &str) -> Region {
    Region {
        region: name.to_owned(),
        ..Region::default()
    }
}

// =============================================================
// Markers
// =============================================================

#[test]
fn products_with_both_coordinates_get_exactly_one_marker_each() {
    let products = vec![
        located("a", Some(17.385), Some(78.4867)),
        located("b", Some(9.93), Some(76.26)),
    ];
    let markers = markers_for(&products);
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].product.id, "a");
    assert_eq!(markers[0].position, GeoPoint::new(17.385, 78.4867));
    assert_eq!(markers[1].position, GeoPoint::new(9.93, 76.26));
}

#[test]
fn products_missing_a_coordinate_get_no_marker() {
    let products = vec![
        located("lat-only", Some(17.0), None),
        located("lng-only", None, Some(78.0)),
        located("neither", None, None),
        Product {
            id: "no-location".to_owned(),
            ..Product::default()
        },
    ];
    assert!(markers_for(&products).is_empty());
}

#[test]
fn map_data_filters_products_to_markers() {
    let data = MapData::from_responses(
        vec![region("Telangana")],
        &[located("a", Some(17.0), Some(78.0)), located("b", None, None)],
    );
    assert_eq!(data.regions.len(), 1);
    assert_eq!(data.markers.len(), 1);
}

// =============================================================
// Region selection
// =============================================================

#[test]
fn selecting_region_with_location_recenters_on_it() {
    let mut state = MapState::default();
    let mut telangana = region("Telangana");
    telangana.location = Some(Location {
        latitude: Some(17.385),
        longitude: Some(78.4867),
    });
    telangana.products = vec![located("p", Some(1.0), Some(2.0))];

    state.select_region(&telangana);
    assert_eq!(state.selected_region.as_deref(), Some("Telangana"));
    assert_eq!(state.center, GeoPoint::new(17.385, 78.4867));
    assert!(state.is_selected(&telangana));
}

#[test]
fn selecting_region_without_location_uses_first_located_sample() {
    let mut state = MapState::default();
    let mut kerala = region("Kerala");
    kerala.products = vec![
        located("unlocated", None, None),
        located("first", Some(9.93), Some(76.26)),
        located("second", Some(8.5), Some(76.9)),
    ];
    state.select_region(&kerala);
    assert_eq!(state.center, GeoPoint::new(9.93, 76.26));
}

#[test]
fn selecting_region_without_any_coordinate_keeps_center() {
    let mut state = MapState::default();
    state.select_region(&region("Unknown"));
    assert_eq!(state.selected_region.as_deref(), Some("Unknown"));
    assert_eq!(state.center, DEFAULT_CENTER);
}

#[test]
fn selected_region_lookup_by_name() {
    let regions = vec![region("Odisha"), region("Kerala")];
    let mut state = MapState::default();
    assert!(selected_region(&state, &regions).is_none());
    state.select_region(&regions[1]);
    assert_eq!(selected_region(&state, &regions).map(|r| r.region.as_str()), Some("Kerala"));
}

// =============================================================
// Deep links and helpers
// =============================================================

#[test]
fn center_from_query_requires_both_parseable_values() {
    assert_eq!(
        center_from_query(Some("17.385"), Some("78.4867")),
        Some(GeoPoint::new(17.385, 78.4867))
    );
    assert_eq!(center_from_query(Some("17.385"), None), None);
    assert_eq!(center_from_query(None, Some("78.4")), None);
    assert_eq!(center_from_query(Some("north"), Some("78.4")), None);
    assert_eq!(center_from_query(Some("NaN"), Some("78.4")), None);
}

#[test]
fn map_href_round_trips_through_query_parsing() {
    let point = GeoPoint::new(26.9124, 75.7873);
    assert_eq!(map_href(point), "/map?lat=26.9124&lng=75.7873");
    assert_eq!(center_from_query(Some("26.9124"), Some("75.7873")), Some(point));
}

#[test]
fn tag_preview_caps_at_three_with_overflow_count() {
    let tags: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| (*s).to_owned()).collect();
    let (shown, overflow) = tag_preview(&tags);
    assert_eq!(shown, vec!["a", "b", "c"]);
    assert_eq!(overflow, Some(2));

    let (shown, overflow) = tag_preview(&tags[..2]);
    assert_eq!(shown.len(), 2);
    assert_eq!(overflow, None);
}

#[test]
fn zoom_is_clamped() {
    let mut state = MapState::default();
    for _ in 0..30 {
        state.zoom_in();
    }
    assert_eq!(state.zoom, crate::util::geo::MAX_ZOOM);
    for _ in 0..30 {
        state.zoom_out();
    }
    assert_eq!(state.zoom, crate::util::geo::MIN_ZOOM);
}

#[test]
fn default_state_centers_on_default_point() {
    let state = MapState::default();
    let viewport = state.viewport();
    assert_eq!(viewport.center, DEFAULT_CENTER);
    assert_eq!(viewport.zoom, DEFAULT_ZOOM);
}

#[test]
fn region_products_href_encodes_name() {
    assert_eq!(region_products_href("Tamil Nadu"), "/products?region=Tamil%20Nadu");
}

#[test]
fn view_all_only_when_samples_truncated() {
    let mut kerala = region("Kerala");
    kerala.products = (0..6).map(|i| located(&i.to_string(), None, None)).collect();
    assert!(!has_more_products(&kerala));
    kerala.products.push(located("7", None, None));
    assert!(has_more_products(&kerala));
}

#[test]
fn panning_brings_off_screen_marker_into_view() {
    let mut state = MapState::default();
    for _ in 0..30 {
        state.zoom_out();
    }
    let far = GeoPoint::new(40.0, -100.0);
    assert!(!state.viewport().contains(far));

    let (x, y) = state.viewport().to_screen(far);
    state.pan_by(x - MAP_WIDTH / 2.0, y - MAP_HEIGHT / 2.0);

    let viewport = state.viewport();
    assert!(viewport.contains(far));
    let (x, y) = viewport.to_screen(far);
    assert!((x - MAP_WIDTH / 2.0).abs() < 1e-6);
    assert!((y - MAP_HEIGHT / 2.0).abs() < 1e-6);
}

#[test]
fn pan_keeps_zoom_and_selection() {
    let mut state = MapState::default();
    state.select_region(&region("Kerala"));
    state.pan_by(120.0, -40.0);
    assert_eq!(state.zoom, DEFAULT_ZOOM);
    assert_eq!(state.selected_region.as_deref(), Some("Kerala"));
    assert_ne!(state.center, DEFAULT_CENTER);
}

#[test]
fn popup_changes_leave_viewport_equal() {
    let mut state = MapState::default();
    let before = state.viewport();
    state.open_popup = Some("p1".to_owned());
    assert_eq!(state.viewport(), before);
    state.zoom_in();
    assert_ne!(state.viewport(), before);
}

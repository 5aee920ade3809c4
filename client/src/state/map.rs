//! Map view state: center, zoom, region selection and marker set.
//!
//! SYSTEM CONTEXT
//! ==============
//! Region details arrive embedded in the `by-region` aggregate, so selecting a
//! region is a pure state change with no network call.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use crate::net::types::{GeoPoint, Product, Region};
use crate::util::format::encode_component;
use crate::util::geo::{Viewport, clamp_zoom};

/// Map center when no deep-link coordinates are given (India).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint::new(20.5937, 78.9629);
pub const DEFAULT_ZOOM: u8 = 5;
/// Page size for the unfiltered product read behind the markers.
pub const MAP_PRODUCT_LIMIT: u32 = 1000;
/// Tags shown per region before collapsing into a `+N` badge.
pub const REGION_TAG_PREVIEW: usize = 3;
/// Sample products shown for the selected region.
pub const REGION_PRODUCT_PREVIEW: usize = 6;

pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 520.0;

/// One marker per product that carries both coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub position: GeoPoint,
    pub product: Product,
}

/// Markers for every located product, in input order.
pub fn markers_for(products: &[Product]) -> Vec<MapMarker> {
    products
        .iter()
        .filter_map(|product| {
            product.coordinates().map(|position| MapMarker {
                position,
                product: product.clone(),
            })
        })
        .collect()
}

/// Where to recenter when `region` is selected: its own coordinate, else the
/// first embedded sample product with one.
pub fn region_focus(region: &Region) -> Option<GeoPoint> {
    region
        .location
        .as_ref()
        .and_then(|location| location.point())
        .or_else(|| region.products.iter().find_map(Product::coordinates))
}

/// Deep-link center from `?lat=&lng=`; both must parse to finite numbers.
pub fn center_from_query(lat: Option<&str>, lng: Option<&str>) -> Option<GeoPoint> {
    let lat = lat?.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    let lng = lng?.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(GeoPoint::new(lat, lng))
}

/// Link to the map centered on `point`.
pub fn map_href(point: GeoPoint) -> String {
    format!("/map?lat={}&lng={}", point.latitude, point.longitude)
}

/// Catalog link filtered to `region`.
pub fn region_products_href(region: &str) -> String {
    format!("/products?region={}", encode_component(region))
}

/// "View All" is offered only when the sample list was truncated.
pub fn has_more_products(region: &Region) -> bool {
    region.products.len() > REGION_PRODUCT_PREVIEW
}

/// Tag badges for a region card: first three tags plus an overflow count.
pub fn tag_preview(tags: &[String]) -> (Vec<String>, Option<usize>) {
    let shown = tags.iter().take(REGION_TAG_PREVIEW).cloned().collect();
    let hidden = tags.len().saturating_sub(REGION_TAG_PREVIEW);
    (shown, (hidden > 0).then_some(hidden))
}

/// Data loaded for the map view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapData {
    pub regions: Vec<Region>,
    pub markers: Vec<MapMarker>,
}

impl MapData {
    pub fn from_responses(regions: Vec<Region>, products: &[Product]) -> Self {
        Self {
            regions,
            markers: markers_for(products),
        }
    }
}

/// Interactive map state.
#[derive(Clone, Debug, PartialEq)]
pub struct MapState {
    pub center: GeoPoint,
    pub zoom: u8,
    /// Name of the highlighted region.
    pub selected_region: Option<String>,
    /// Product id whose popup is open.
    pub open_popup: Option<String>,
}

impl Default for MapState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            selected_region: None,
            open_popup: None,
        }
    }
}

impl MapState {
    /// Highlight `region` and recenter on it when a coordinate is known.
    pub fn select_region(&mut self, region: &Region) {
        self.selected_region = Some(region.region.clone());
        if let Some(focus) = region_focus(region) {
            self.center = focus;
        }
    }

    pub fn is_selected(&self, region: &Region) -> bool {
        self.selected_region.as_deref() == Some(region.region.as_str())
    }

    pub fn zoom_in(&mut self) {
        self.zoom = clamp_zoom(self.zoom.saturating_add(1));
    }

    pub fn zoom_out(&mut self) {
        self.zoom = clamp_zoom(self.zoom.saturating_sub(1));
    }

    /// Move the view by a screen-pixel offset; dragging the map by `(dx, dy)`
    /// pans by `(-dx, -dy)`.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.center = self.viewport().panned_center(dx, dy);
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            center: self.center,
            zoom: self.zoom,
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
        }
    }
}

/// The selected region looked up in the loaded aggregate.
pub fn selected_region<'a>(state: &MapState, regions: &'a [Region]) -> Option<&'a Region> {
    let name = state.selected_region.as_deref()?;
    regions.iter().find(|region| region.region == name)
}

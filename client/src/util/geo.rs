//! Web-Mercator math for the tile map.
//!
//! World pixel coordinates at zoom `z` span `TILE_SIZE * 2^z` on each axis,
//! origin at the top-left (180°W, ~85.05°N). The viewport maps its center
//! point to the middle of the on-screen box.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use std::f64::consts::PI;

use crate::net::types::GeoPoint;

pub const TILE_SIZE: f64 = 256.0;
pub const MIN_ZOOM: u8 = 2;
pub const MAX_ZOOM: u8 = 18;
/// Latitude limit of the square Mercator world.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1_u32 << zoom.min(MAX_ZOOM))
}

/// Project a point to world pixels at `zoom`.
pub fn project(point: GeoPoint, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = point.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.longitude + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// Inverse of [`project`]: world pixels at `zoom` back to a point.
pub fn unproject(x: f64, y: f64, zoom: u8) -> GeoPoint {
    let size = world_size(zoom);
    let longitude = x / size * 360.0 - 180.0;
    let n = PI * (1.0 - 2.0 * y / size);
    GeoPoint::new(n.sinh().atan().to_degrees(), longitude)
}

/// One map tile and where it sits inside the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct TilePlacement {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
    pub left: f64,
    pub top: f64,
}

impl TilePlacement {
    pub fn url(&self) -> String {
        format!("https://tile.openstreetmap.org/{}/{}/{}.png", self.zoom, self.x, self.y)
    }
}

/// Visible map window in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: GeoPoint,
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Position of `point` relative to the viewport's top-left corner.
    pub fn to_screen(&self, point: GeoPoint) -> (f64, f64) {
        let (cx, cy) = project(self.center, self.zoom);
        let (px, py) = project(point, self.zoom);
        let size = world_size(self.zoom);
        // Take the horizontally nearest copy of the point across the antimeridian.
        let mut dx = px - cx;
        if dx > size / 2.0 {
            dx -= size;
        } else if dx < -size / 2.0 {
            dx += size;
        }
        (self.width / 2.0 + dx, self.height / 2.0 + (py - cy))
    }

    /// Center after moving the view by `(dx, dy)` screen pixels. Longitude
    /// wraps around the world; latitude stops at the Mercator edge.
    pub fn panned_center(&self, dx: f64, dy: f64) -> GeoPoint {
        let size = world_size(self.zoom);
        let (cx, cy) = project(self.center, self.zoom);
        let x = (cx + dx).rem_euclid(size);
        let y = (cy + dy).clamp(0.0, size);
        unproject(x, y, self.zoom)
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        let (x, y) = self.to_screen(point);
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    /// Tiles covering the viewport. Columns wrap around the antimeridian; rows
    /// outside the world are skipped.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tiles(&self) -> Vec<TilePlacement> {
        let (cx, cy) = project(self.center, self.zoom);
        let origin_x = cx - self.width / 2.0;
        let origin_y = cy - self.height / 2.0;
        let tiles_per_side = 1_i64 << self.zoom.min(MAX_ZOOM);

        let first_col = (origin_x / TILE_SIZE).floor() as i64;
        let last_col = ((origin_x + self.width) / TILE_SIZE).floor() as i64;
        let first_row = ((origin_y / TILE_SIZE).floor() as i64).max(0);
        let last_row = (((origin_y + self.height) / TILE_SIZE).floor() as i64).min(tiles_per_side - 1);

        let mut placements = Vec::new();
        for row in first_row..=last_row {
            for col in first_col..=last_col {
                #[allow(clippy::cast_precision_loss)]
                placements.push(TilePlacement {
                    x: col.rem_euclid(tiles_per_side) as u32,
                    y: row as u32,
                    zoom: self.zoom,
                    left: col as f64 * TILE_SIZE - origin_x,
                    top: row as f64 * TILE_SIZE - origin_y,
                });
            }
        }
        placements
    }
}

pub fn clamp_zoom(zoom: u8) -> u8 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

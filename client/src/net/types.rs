//! Wire-schema DTOs for the catalog backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly (`_id`, `gi_tag`, ...). Optional
//! collections default to empty so partially populated aggregates still decode,
//! and unknown fields are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Location block as stored by the backend. Either coordinate may be absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Location {
    /// Both coordinates, if both are present and finite.
    pub fn point(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }
}

/// An artisan product record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque backend identifier.
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Geographical Indication label.
    pub gi_tag: String,
    pub region: String,
    pub artisan_name: String,
    #[serde(default)]
    pub artisan_contact: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub cultural_story: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl Product {
    /// Map position, only when both coordinates are present.
    pub fn coordinates(&self) -> Option<GeoPoint> {
        self.location.as_ref().and_then(Location::point)
    }

    /// Image URL with blank values treated as missing.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}

/// Products aggregated under one region.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub region: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub count: u64,
    #[serde(default)]
    pub gi_tags: Vec<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Products aggregated under one GI tag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GiTag {
    pub gi_tag: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub count: u64,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// One entry in a top-N breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCount {
    #[serde(rename = "_id")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub count: u64,
}

/// Catalog-wide aggregate counts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(deserialize_with = "deserialize_count")]
    pub total_products: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub unique_regions: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub unique_gi_tags: u64,
    #[serde(deserialize_with = "deserialize_count")]
    pub unique_artisans: u64,
    #[serde(default)]
    pub top_regions: Vec<RankedCount>,
    #[serde(default)]
    pub top_gi_tags: Vec<RankedCount>,
}

/// `GET /api/products` body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// `GET /api/products/{id}` body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProductResponse {
    #[serde(default)]
    pub product: Option<Product>,
}

/// `GET /api/regions` and `GET /api/products/by-region` body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RegionListResponse {
    #[serde(default)]
    pub regions: Vec<Region>,
}

/// `GET /api/gi-tags` and `GET /api/products/by-gi-tag` body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GiTagListResponse {
    #[serde(default)]
    pub gi_tags: Vec<GiTag>,
}

/// `GET /api/stats` body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatisticsResponse {
    pub statistics: Statistics,
}

/// `POST /api/products` body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CreateProductResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub product: Option<Product>,
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer count"))
        }
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}

//! Product-list filters and the joined data behind the Products view.
//!
//! DESIGN
//! ======
//! Filtering happens on the backend only. `CatalogPage` carries the product
//! list exactly as returned; region/tag lists exist solely to fill the filter
//! dropdowns.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{GiTag, Product, Region};

/// Which filter field a control edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Region,
    GiTag,
    ArtisanName,
}

/// Query filters for `GET /api/products`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilters {
    pub region: String,
    pub gi_tag: String,
    /// Substring match on artisan name.
    pub artisan_name: String,
    pub limit: Option<u32>,
    pub skip: Option<u32>,
}

impl ProductFilters {
    /// Filters pre-seeded with a region, as linked from the map view.
    pub fn for_region(region: Option<String>) -> Self {
        Self {
            region: region.map(|r| r.trim().to_owned()).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Unfiltered listing capped at `limit` entries.
    pub fn capped(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Region => &self.region,
            FilterField::GiTag => &self.gi_tag,
            FilterField::ArtisanName => &self.artisan_name,
        }
    }

    pub fn set(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Region => self.region = value,
            FilterField::GiTag => self.gi_tag = value,
            FilterField::ArtisanName => self.artisan_name = value,
        }
    }

    /// Query-string pairs with blank filters omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for (name, value) in [
            ("region", &self.region),
            ("gi_tag", &self.gi_tag),
            ("artisan_name", &self.artisan_name),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                pairs.push((name, value.to_owned()));
            }
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        pairs
    }
}

/// Everything the Products view renders after its three reads complete.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogPage {
    pub products: Vec<Product>,
    pub regions: Vec<String>,
    pub gi_tags: Vec<String>,
}

impl CatalogPage {
    pub fn from_responses(products: Vec<Product>, regions: &[Region], gi_tags: &[GiTag]) -> Self {
        Self {
            products,
            regions: region_names(regions),
            gi_tags: gi_tag_names(gi_tags),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Region names for dropdowns and autocomplete, blanks skipped.
pub fn region_names(regions: &[Region]) -> Vec<String> {
    regions
        .iter()
        .map(|r| r.region.clone())
        .filter(|name| !name.trim().is_empty())
        .collect()
}

/// GI tag names for dropdowns and autocomplete, blanks skipped.
pub fn gi_tag_names(gi_tags: &[GiTag]) -> Vec<String> {
    gi_tags
        .iter()
        .map(|t| t.gi_tag.clone())
        .filter(|name| !name.trim().is_empty())
        .collect()
}

/// Route to a product's detail view.
pub fn product_href(id: &str) -> String {
    format!("/products/{id}")
}

//! REST helpers for the catalog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, one round trip per
//! call with no retries, caching, or in-flight dedup.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! browser owns all fetching.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` so each view can render its own error
//! text instead of failing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{CreateProductResponse, GiTag, Product, Region, Statistics};
use crate::state::catalog::ProductFilters;

pub const PRODUCTS_PATH: &str = "/api/products";
pub const PRODUCTS_BY_REGION_PATH: &str = "/api/products/by-region";
pub const PRODUCTS_BY_GI_TAG_PATH: &str = "/api/products/by-gi-tag";
pub const REGIONS_PATH: &str = "/api/regions";
pub const GI_TAGS_PATH: &str = "/api/gi-tags";
pub const STATS_PATH: &str = "/api/stats";

fn product_path(id: &str) -> String {
    format!("{PRODUCTS_PATH}/{}", id.trim())
}

#[cfg(feature = "hydrate")]
async fn fetch_json<T: serde::de::DeserializeOwned>(request: gloo_net::http::RequestBuilder) -> Result<T, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// List products via `GET /api/products`, omitting empty filters from the query.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn list_products(filters: &ProductFilters) -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::config::endpoint(PRODUCTS_PATH);
        let request = gloo_net::http::Request::get(&url).query(filters.query_pairs());
        let body: super::types::ProductListResponse = fetch_json(request).await?;
        Ok(body.products)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filters;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one product via `GET /api/products/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] on 404, for a blank id, or when the body
/// carries no product.
pub async fn get_product(id: &str) -> Result<Product, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::NotFound);
    }
    #[cfg(feature = "hydrate")]
    {
        let url = super::config::endpoint(&product_path(id));
        let body: super::types::ProductResponse = fetch_json(gloo_net::http::Request::get(&url)).await?;
        body.product.ok_or(ApiError::NotFound)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_path(id);
        Err(ApiError::Unavailable)
    }
}

/// Create a product via multipart `POST /api/products`.
///
/// `fields` are sent as-is; callers strip empty values first.
///
/// # Errors
///
/// Returns an [`ApiError`] carrying the backend `detail` text when the
/// request is rejected.
pub async fn create_product(fields: &[(&'static str, String)]) -> Result<CreateProductResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_owned()))?;
        for (name, value) in fields {
            form.append_with_str(name, value)
                .map_err(|_| ApiError::Network(format!("could not encode field {name}")))?;
        }
        let url = super::config::endpoint(PRODUCTS_PATH);
        let request = gloo_net::http::Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fields;
        Err(ApiError::Unavailable)
    }
}

/// Region aggregates with embedded sample products via `GET /api/products/by-region`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn products_by_region() -> Result<Vec<Region>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::config::endpoint(PRODUCTS_BY_REGION_PATH);
        let body: super::types::RegionListResponse = fetch_json(gloo_net::http::Request::get(&url)).await?;
        Ok(body.regions)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// GI-tag aggregates with embedded sample products via `GET /api/products/by-gi-tag`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn products_by_gi_tag() -> Result<Vec<GiTag>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::config::endpoint(PRODUCTS_BY_GI_TAG_PATH);
        let body: super::types::GiTagListResponse = fetch_json(gloo_net::http::Request::get(&url)).await?;
        Ok(body.gi_tags)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Distinct regions via `GET /api/regions`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn list_regions() -> Result<Vec<Region>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::config::endpoint(REGIONS_PATH);
        let body: super::types::RegionListResponse = fetch_json(gloo_net::http::Request::get(&url)).await?;
        Ok(body.regions)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Distinct GI tags via `GET /api/gi-tags`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn list_gi_tags() -> Result<Vec<GiTag>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::config::endpoint(GI_TAGS_PATH);
        let body: super::types::GiTagListResponse = fetch_json(gloo_net::http::Request::get(&url)).await?;
        Ok(body.gi_tags)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Catalog statistics via `GET /api/stats`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn statistics() -> Result<Statistics, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::config::endpoint(STATS_PATH);
        let body: super::types::StatisticsResponse = fetch_json(gloo_net::http::Request::get(&url)).await?;
        Ok(body.statistics)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

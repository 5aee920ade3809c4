//! Region explorer: tile map with product markers and a region sidebar.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::map_canvas::MapCanvas;
use crate::components::status::{ErrorBlock, LoadingBlock};
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Product, Region};
use crate::state::catalog::{ProductFilters, product_href};
use crate::state::map::{
    MAP_PRODUCT_LIMIT, MapData, MapState, REGION_PRODUCT_PREVIEW, center_from_query, has_more_products,
    region_products_href, selected_region, tag_preview,
};
use crate::util::format::format_price;
use crate::util::query::use_query;

pub const MAP_FAILED_MESSAGE: &str = "Failed to load map data";

/// Region aggregate and the capped product list, joined.
pub async fn load_map_data() -> Result<MapData, String> {
    let filters = ProductFilters::capped(MAP_PRODUCT_LIMIT);
    let (regions, products) = futures::join!(api::products_by_region(), api::list_products(&filters));
    let fail = |err: ApiError| {
        leptos::logging::warn!("map load failed: {err}");
        MAP_FAILED_MESSAGE.to_owned()
    };
    let regions = regions.map_err(fail)?;
    let products = products.map_err(fail)?;
    Ok(MapData::from_responses(regions, &products))
}

#[component]
pub fn MapPage() -> impl IntoView {
    let query = use_query_map();
    let map = RwSignal::new(MapState::default());

    Effect::new(move || {
        let (lat, lng) = query.with(|params| (params.get("lat"), params.get("lng")));
        if let Some(center) = center_from_query(lat.as_deref(), lng.as_deref()) {
            map.update(|state| state.center = center);
        }
    });

    let data = use_query(|| (), |()| load_map_data());

    move || {
        let state = data.get();
        if state.loading {
            return view! { <LoadingBlock message="Loading map..."/> }.into_any();
        }
        if let Some(message) = state.error {
            return view! { <ErrorBlock message=message/> }.into_any();
        }
        let MapData { regions, markers } = state.data.unwrap_or_default();
        let marker_count = markers.len();
        let region_count = regions.len();
        let details_regions = regions.clone();

        view! {
            <div class="map-view">
                <h1>"Explore by Region"</h1>
                <p class="map-view__intro">
                    "Hover over markers to see product details. Click region names or markers to explore products. Each marker shows the exact location where the product was added."
                </p>
                {(marker_count > 0)
                    .then(|| {
                        view! {
                            <p class="map-view__count">{format!("📍 {marker_count} products with location markers on the map")}</p>
                        }
                    })}
                <div class="map-layout">
                    <div class="regions-sidebar">
                        <h2>{format!("Regions ({region_count})")}</h2>
                        <div class="regions-list">
                            {regions.into_iter().map(|region| view! { <RegionItem region=region map=map/> }).collect_view()}
                        </div>
                    </div>
                    <div class="map-container">
                        <MapCanvas map=map markers=markers/>
                    </div>
                </div>
                {move || {
                    map.with(|state| selected_region(state, &details_regions).cloned())
                        .map(|region| view! { <RegionDetails region=region/> })
                }}
            </div>
        }
        .into_any()
    }
}

#[component]
fn RegionItem(region: Region, map: RwSignal<MapState>) -> impl IntoView {
    let (tags, overflow) = tag_preview(&region.gi_tags);
    let name = region.region.clone();
    let count = region.count;
    let active_region = region.clone();
    view! {
        <div
            class="region-item"
            class:active=move || map.with(|state| state.is_selected(&active_region))
            on:click=move |_| map.update(|state| state.select_region(&region))
        >
            <h3>{name}</h3>
            <p class="region-count">{format!("{count} products")}</p>
            <div class="gi-tags">
                {tags.into_iter().map(|tag| view! { <span class="gi-tag-badge">{tag}</span> }).collect_view()}
                {overflow.map(|hidden| view! { <span class="gi-tag-badge">{format!("+{hidden}")}</span> })}
            </div>
        </div>
    }
}

#[component]
fn RegionDetails(region: Region) -> impl IntoView {
    let stats = format!("{} products • {} GI Tags", region.count, region.gi_tags.len());
    let view_all = has_more_products(&region).then(|| {
        let href = region_products_href(&region.region);
        let label = format!("View All {} Products", region.count);
        view! { <a href=href class="btn btn-secondary">{label}</a> }
    });
    let preview: Vec<Product> = region.products.iter().take(REGION_PRODUCT_PREVIEW).cloned().collect();
    let heading = format!("Products from {}", region.region);

    view! {
        <div class="selected-region-details">
            <h2>{region.region}</h2>
            <p class="region-stats">{stats}</p>
            {(!preview.is_empty())
                .then(|| {
                    view! {
                        <div class="region-products-preview">
                            <h3>{heading}</h3>
                            <div class="products-grid-mini">
                                {preview.into_iter().map(|product| view! { <MiniProductCard product=product/> }).collect_view()}
                            </div>
                            {view_all}
                        </div>
                    }
                })}
        </div>
    }
}

/// Compact card; a broken image is hidden rather than replaced.
#[component]
fn MiniProductCard(product: Product) -> impl IntoView {
    let hidden = RwSignal::new(false);
    let image = product.image().map(str::to_owned);
    let alt = product.name.clone();
    let price = product.price.map(format_price);
    view! {
        <a href=product_href(&product.id) class="product-mini-card">
            {image.map(|src| {
                view! {
                    <img
                        src=src
                        alt=alt
                        style:display=move || if hidden.get() { "none" } else { "block" }
                        on:error=move |_| hidden.set(true)
                    />
                }
            })}
            <h4>{product.name}</h4>
            <p class="product-gi">{product.gi_tag}</p>
            {price.map(|price| view! { <p class="product-price-mini">{price}</p> })}
        </a>
    }
}

//! Catalog browsing with region, GI tag and artisan filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The grid shows exactly what the backend returned for the current filter
//! combination. Filtering happens server-side only.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::product_card::ProductCard;
use crate::components::status::{ErrorBlock, LoadingBlock};
use crate::net::api;
use crate::net::error::ApiError;
use crate::state::catalog::{CatalogPage, FilterField, ProductFilters};
use crate::util::query::use_query;

pub const PRODUCTS_FAILED_MESSAGE: &str = "Failed to load products";
pub const NO_PRODUCTS_MESSAGE: &str = "No products found matching your filters.";

/// Filtered list plus the dropdown sources, joined into one result.
pub async fn load_catalog(filters: ProductFilters) -> Result<CatalogPage, String> {
    let (products, regions, gi_tags) =
        futures::join!(api::list_products(&filters), api::list_regions(), api::list_gi_tags());
    let fail = |err: ApiError| {
        leptos::logging::warn!("catalog load failed: {err}");
        PRODUCTS_FAILED_MESSAGE.to_owned()
    };
    Ok(CatalogPage::from_responses(
        products.map_err(fail)?,
        &regions.map_err(fail)?,
        &gi_tags.map_err(fail)?,
    ))
}

/// Dropdown options paired with whether each is the active value.
pub fn option_rows(options: Vec<String>, selected: &str) -> Vec<(String, bool)> {
    options
        .into_iter()
        .map(|option| {
            let is_selected = option == selected;
            (option, is_selected)
        })
        .collect()
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let query = use_query_map();
    let filters = RwSignal::new(ProductFilters::for_region(query.read_untracked().get("region")));

    // Follow later `?region=` changes while mounted.
    Effect::new(move |previous: Option<Option<String>>| {
        let region = query.read().get("region");
        if previous.is_some_and(|previous| previous != region) {
            filters.update(|f| f.set(FilterField::Region, region.clone().unwrap_or_default()));
        }
        region
    });

    let catalog = use_query(move || filters.get(), load_catalog);

    let regions = Signal::derive(move || {
        catalog.with(|state| state.data.as_ref().map(|page| page.regions.clone()).unwrap_or_default())
    });
    let gi_tags = Signal::derive(move || {
        catalog.with(|state| state.data.as_ref().map(|page| page.gi_tags.clone()).unwrap_or_default())
    });

    view! {
        <div class="products-page">
            <h1>"Browse Products"</h1>
            <div class="filters">
                <FilterSelect label="Region" all_label="All Regions" field=FilterField::Region options=regions filters=filters/>
                <FilterSelect label="GI Tag" all_label="All GI Tags" field=FilterField::GiTag options=gi_tags filters=filters/>
                <div class="filter-group">
                    <label>"Artisan Name"</label>
                    <input
                        type="text"
                        placeholder="Search artisan..."
                        prop:value=move || filters.with(|f| f.artisan_name.clone())
                        on:input=move |ev| filters.update(|f| f.set(FilterField::ArtisanName, event_target_value(&ev)))
                    />
                </div>
            </div>
            {move || {
                let state = catalog.get();
                if state.loading {
                    return view! { <LoadingBlock message="Loading products..."/> }.into_any();
                }
                if let Some(message) = state.error {
                    return view! { <ErrorBlock message=message/> }.into_any();
                }
                let page = state.data.unwrap_or_default();
                if page.is_empty() {
                    return view! {
                        <div class="no-products">
                            <p>{NO_PRODUCTS_MESSAGE}</p>
                            <a href="/upload" class="btn btn-primary">"Upload First Product"</a>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="product-grid">
                        {page.products.into_iter().map(|product| view! { <ProductCard product=product/> }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

/// Dropdown bound to one filter field; the empty option clears it.
#[component]
fn FilterSelect(
    label: &'static str,
    all_label: &'static str,
    field: FilterField,
    options: Signal<Vec<String>>,
    filters: RwSignal<ProductFilters>,
) -> impl IntoView {
    view! {
        <div class="filter-group">
            <label>{label}</label>
            <select
                prop:value=move || filters.with(|f| f.get(field).to_owned())
                on:change=move |ev| filters.update(|f| f.set(field, event_target_value(&ev)))
            >
                <option value="">{all_label}</option>
                {move || {
                    let selected = filters.with(|f| f.get(field).to_owned());
                    option_rows(options.get(), &selected)
                        .into_iter()
                        .map(|(option, is_selected)| {
                            let text = option.clone();
                            view! {
                                <option value=option selected=is_selected>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

//! Single product view with its cultural story and map link.

#[cfg(test)]
#[path = "product_detail_test.rs"]
mod product_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::product_card::FallbackImage;
use crate::components::status::{ErrorBlock, LoadingBlock};
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::Product;
use crate::state::map::map_href;
use crate::util::format::{DETAIL_PLACEHOLDER_IMAGE, format_price, non_blank};
use crate::util::query::use_query;

pub const PRODUCT_FAILED_MESSAGE: &str = "Failed to load product";
pub const PRODUCT_NOT_FOUND_MESSAGE: &str = "Product not found";

/// Text shown when the detail fetch fails.
pub fn detail_error_message(err: &ApiError) -> String {
    match err {
        ApiError::NotFound => PRODUCT_NOT_FOUND_MESSAGE.to_owned(),
        other => other.user_message(PRODUCT_FAILED_MESSAGE),
    }
}

pub async fn load_product(id: String) -> Result<Product, String> {
    api::get_product(&id).await.map_err(|err| detail_error_message(&err))
}

/// Labelled metadata rows; optional fields appear only when present.
pub fn detail_rows(product: &Product) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("📍 Region:", product.region.clone()),
        ("🏷️ GI Tag:", product.gi_tag.clone()),
        ("👨‍🎨 Artisan:", product.artisan_name.clone()),
    ];
    if let Some(contact) = non_blank(product.artisan_contact.as_deref()) {
        rows.push(("📞 Contact:", contact.to_owned()));
    }
    if let Some(price) = product.price {
        rows.push(("💰 Price:", format_price(price)));
    }
    if let Some(category) = non_blank(product.category.as_deref()) {
        rows.push(("📂 Category:", category.to_owned()));
    }
    rows
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let product = use_query(
        move || params.read().get("id").unwrap_or_default(),
        load_product,
    );

    move || {
        let state = product.get();
        if state.loading {
            return view! { <LoadingBlock message="Loading product details..."/> }.into_any();
        }
        match (state.error, state.data) {
            (None, Some(product)) => view! { <ProductDetail product=product/> }.into_any(),
            (error, _) => {
                let message = error.unwrap_or_else(|| PRODUCT_NOT_FOUND_MESSAGE.to_owned());
                view! { <ErrorBlock message=message back_href="/products" back_label="Back to Products"/> }
                    .into_any()
            }
        }
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let rows = detail_rows(&product);
    let story = non_blank(product.cultural_story.as_deref()).map(str::to_owned);
    let location = product.location.map(|location| {
        let text = format!(
            "Latitude: {}, Longitude: {}",
            location.latitude.map(|v| v.to_string()).unwrap_or_default(),
            location.longitude.map(|v| v.to_string()).unwrap_or_default()
        );
        (text, location.point().map(map_href))
    });
    let image = product.image().map(str::to_owned);
    let alt = product.name.clone();

    view! {
        <div class="product-detail">
            <a href="/products" class="back-link">"← Back to Products"</a>
            <div class="product-detail-content">
                <div class="product-image-section">
                    {match image {
                        Some(src) => view! {
                            <FallbackImage src=src alt=alt image_class="product-detail-image" fallback=DETAIL_PLACEHOLDER_IMAGE/>
                        }
                            .into_any(),
                        None => view! {
                            <div class="product-image-placeholder-large">
                                <span>"No Image Available"</span>
                            </div>
                        }
                            .into_any(),
                    }}
                </div>
                <div class="product-info-section">
                    <h1>{product.name}</h1>
                    <div class="product-meta">
                        {rows
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="meta-item">
                                        <span class="meta-label">{label}</span>
                                        <span class="meta-value">{value}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="product-description">
                        <h2>"Description"</h2>
                        <p>{product.description}</p>
                    </div>
                    {story.map(|story| view! {
                        <div class="cultural-story">
                            <h2>"Cultural Story"</h2>
                            <p>{story}</p>
                        </div>
                    })}
                    {location.map(|(text, href)| view! {
                        <div class="product-location">
                            <h2>"Location"</h2>
                            <p>{text}</p>
                            {href.map(|href| view! { <a href=href class="btn btn-primary">"View on Map"</a> })}
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

//! Product summary card used by the catalog grid.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::catalog::product_href;
use crate::util::format::{CARD_PLACEHOLDER_IMAGE, format_price};

/// Clickable card linking to the product's detail page.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = product_href(&product.id);
    let price = product.price.map(format_price);
    let image = product.image().map(str::to_owned);
    let alt = product.name.clone();

    view! {
        <a href=href class="card product-card">
            {match image {
                Some(src) => view! { <FallbackImage src=src alt=alt image_class="product-image" fallback=CARD_PLACEHOLDER_IMAGE/> }.into_any(),
                None => view! {
                    <div class="product-image-placeholder">
                        <span>"No Image"</span>
                    </div>
                }
                    .into_any(),
            }}
            <h3>{product.name}</h3>
            <p class="product-region">"📍 " {product.region}</p>
            <p class="product-gi-tag">"🏷️ " {product.gi_tag}</p>
            <p class="product-artisan">"👨‍🎨 " {product.artisan_name}</p>
            {price.map(|price| view! { <p class="product-price">{price}</p> })}
        </a>
    }
}

/// Image that swaps to `fallback` once if `src` fails to load.
#[component]
pub fn FallbackImage(
    src: String,
    alt: String,
    #[prop(into)] image_class: String,
    fallback: &'static str,
) -> impl IntoView {
    let failed = RwSignal::new(false);
    view! {
        <img
            src=move || if failed.get() { fallback.to_owned() } else { src.clone() }
            alt=alt
            class=image_class
            on:error=move |_| failed.set(true)
        />
    }
}

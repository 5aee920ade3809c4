//! Slippy-map rendering: OpenStreetMap tiles plus product markers.
//!
//! DESIGN
//! ======
//! Tiles and markers are plain absolutely positioned elements laid out from
//! the same Web-Mercator projection, so the whole map is ordinary DOM driven
//! by `MapState`. Dragging the background pans; markers and controls keep
//! their own pointer handling.

use leptos::prelude::*;

use crate::state::catalog::product_href;
use crate::state::map::{MapMarker, MapState};
use crate::util::format::{format_coordinate, format_price, non_blank};

pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Pointer targets that keep their own click behavior instead of panning.
#[cfg(feature = "hydrate")]
const NON_DRAG_TARGETS: &str = ".map-marker, .map-popup, .map-canvas__controls";

#[component]
pub fn MapCanvas(map: RwSignal<MapState>, #[prop(into)] markers: Signal<Vec<MapMarker>>) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Div>::new();
    // Last pointer position while a drag is in progress.
    let drag = RwSignal::new(None::<(f64, f64)>);
    let viewport = Memo::new(move |_| map.with(MapState::viewport));

    let tiles = move || {
        viewport
            .get()
            .tiles()
            .into_iter()
            .map(|tile| {
                let style = format!("left: {:.1}px; top: {:.1}px;", tile.left, tile.top);
                view! { <img class="map-tile" src=tile.url() style=style alt="" draggable="false"/> }
            })
            .collect_view()
    };

    let pins = move || {
        let viewport = viewport.get();
        markers
            .get()
            .into_iter()
            .filter(|marker| viewport.contains(marker.position))
            .map(|marker| {
                let (x, y) = viewport.to_screen(marker.position);
                let style = format!("left: {x:.1}px; top: {y:.1}px;");
                let id = marker.product.id.clone();
                let hover_id = id.clone();
                let is_open = move || map.with(|state| state.open_popup.as_deref() == Some(id.as_str()));
                view! {
                    <div
                        class="map-marker"
                        style=style
                        on:mouseenter=move |_| map.update(|state| state.open_popup = Some(hover_id.clone()))
                        on:mouseleave=move |_| map.update(|state| state.open_popup = None)
                    >
                        <span class="map-marker__pin">"📍"</span>
                        <Show when=is_open>
                            <MarkerPopup marker=marker.clone()/>
                        </Show>
                    </div>
                }
            })
            .collect_view()
    };

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if ev.button() != 0 || pointer_hits(&ev, NON_DRAG_TARGETS) {
                    return;
                }
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get() {
                    let _ = canvas.set_pointer_capture(ev.pointer_id());
                }
                drag.set(Some(client_point(&ev)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some((last_x, last_y)) = drag.get_untracked() else {
                    return;
                };
                let (x, y) = client_point(&ev);
                drag.set(Some((x, y)));
                map.update(|state| state.pan_by(last_x - x, last_y - y));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                if drag.get_untracked().is_none() {
                    return;
                }
                if let Some(canvas) = canvas_ref.get() {
                    let _ = canvas.release_pointer_capture(ev.pointer_id());
                }
                drag.set(None);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let size = {
        let viewport = viewport.get_untracked();
        format!("width: {}px; height: {}px;", viewport.width, viewport.height)
    };

    view! {
        <div
            class="map-canvas"
            class:map-canvas--dragging=move || drag.with(Option::is_some)
            style=size
            node_ref=canvas_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_up
        >
            <div class="map-canvas__tiles">{tiles}</div>
            <div class="map-canvas__markers">{pins}</div>
            <div class="map-canvas__controls">
                <button class="map-zoom" on:click=move |_| map.update(MapState::zoom_in) title="Zoom in">
                    "+"
                </button>
                <button class="map-zoom" on:click=move |_| map.update(MapState::zoom_out) title="Zoom out">
                    "−"
                </button>
            </div>
            <span class="map-canvas__attribution">{TILE_ATTRIBUTION}</span>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn client_point(ev: &leptos::ev::PointerEvent) -> (f64, f64) {
    (f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[cfg(feature = "hydrate")]
fn pointer_hits(ev: &leptos::ev::PointerEvent, selector: &str) -> bool {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

#[component]
fn MarkerPopup(marker: MapMarker) -> impl IntoView {
    let product = marker.product;
    let contact = non_blank(product.artisan_contact.as_deref()).map(str::to_owned);
    let price = product.price.map(format_price);
    let coordinates = format!(
        "{}, {}",
        format_coordinate(marker.position.latitude),
        format_coordinate(marker.position.longitude)
    );
    view! {
        <div class="map-popup">
            <h3>{product.name}</h3>
            <p>"📍 " <strong>"Region: "</strong> {product.region}</p>
            <p>"🏷️ " <strong>"GI Tag: "</strong> {product.gi_tag}</p>
            <p>"👨‍🎨 " <strong>"Artisan: "</strong> {product.artisan_name}</p>
            {contact.map(|contact| view! { <p>"📞 " <strong>"Contact: "</strong> {contact}</p> })}
            {price.map(|price| view! { <p>"💰 " <strong>"Price: "</strong> {price}</p> })}
            <p class="map-popup__location">"📍 Location: " {coordinates}</p>
            <a href=product_href(&product.id) class="btn btn-primary">
                "View Details"
            </a>
        </div>
    }
}

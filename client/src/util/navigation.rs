//! Same-page link clicks bump the navigation epoch.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::navigation::{NavigationEpoch, reenters_current_page};

/// `href` of the in-app link a plain left click landed on.
#[cfg(feature = "hydrate")]
pub fn clicked_link_href(ev: &leptos::ev::MouseEvent) -> Option<String> {
    use wasm_bindgen::JsCast;

    if ev.button() != 0 || ev.meta_key() || ev.alt_key() || ev.ctrl_key() || ev.shift_key() {
        return None;
    }
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest("a[href]").ok().flatten())
        .filter(|a| a.get_attribute("target").is_none_or(|target| target.is_empty()))
        .and_then(|a| a.get_attribute("href"))
}

#[cfg(not(feature = "hydrate"))]
pub fn clicked_link_href(_ev: &leptos::ev::MouseEvent) -> Option<String> {
    None
}

/// Click handler for a layout root: links back to the page already showing
/// bump the epoch so its queries reload.
///
/// The router navigates asynchronously, so the pathname read here is still
/// the page the click happened on.
pub fn reload_on_reentry() -> impl Fn(leptos::ev::MouseEvent) + Copy + 'static {
    let pathname = use_location().pathname;
    let epoch = expect_context::<RwSignal<NavigationEpoch>>();
    move |ev| {
        let Some(href) = clicked_link_href(&ev) else {
            return;
        };
        if reenters_current_page(&pathname.get_untracked(), &href) {
            epoch.update(NavigationEpoch::bump);
        }
    }
}

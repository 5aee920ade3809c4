//! Persistent header with navigation links, stored email and logout.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{LOGIN_PATH, Session};

pub const BRAND: &str = "Heritage Atlas";

/// Header navigation entries, in display order.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/products", "Products"),
    ("/map", "Map View"),
    ("/upload", "Upload Product"),
    ("/about", "About"),
];

/// Whether the link to `href` should be highlighted for `current`.
///
/// Home only matches exactly; other links also match nested paths.
pub fn is_active_link(current: &str, href: &str) -> bool {
    if href == "/" {
        return current == "/";
    }
    current == href || current.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let email = RwSignal::new(None::<String>);

    let session_for_email = session.clone();
    Effect::new(move || {
        let _ = pathname.get();
        email.set(session_for_email.email());
    });

    let on_logout = move |_| {
        session.logout();
        email.set(None);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="header">
            <div class="header-content">
                <a href="/" class="logo">
                    <span class="logo-icon">"🏛️"</span>
                    <span class="logo-text">{BRAND}</span>
                </a>
                <nav>
                    <ul class="nav-links">
                        {NAV_LINKS
                            .iter()
                            .map(|&(href, label)| {
                                view! {
                                    <li>
                                        <a
                                            href=href
                                            class:active=move || is_active_link(&pathname.get(), href)
                                        >
                                            {label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                        <li class="user-info">
                            <span class="user-email">{move || email.get().unwrap_or_default()}</span>
                            <button class="logout-btn" on:click=on_logout>
                                "Logout"
                            </button>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}

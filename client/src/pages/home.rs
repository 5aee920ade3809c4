//! Landing page: hero, catalog statistics and feature cards.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::status::{ErrorBlock, LoadingBlock};
use crate::net::api;
use crate::net::types::{RankedCount, Statistics};
use crate::util::query::use_query;

pub const STATS_FAILED_MESSAGE: &str = "Failed to load statistics";

/// Label/value pairs for the four summary cards, numbers verbatim.
pub fn summary_cards(stats: &Statistics) -> [(&'static str, String); 4] {
    [
        ("Total Products", stats.total_products.to_string()),
        ("Regions", stats.unique_regions.to_string()),
        ("GI Tags", stats.unique_gi_tags.to_string()),
        ("Artisans", stats.unique_artisans.to_string()),
    ]
}

const FEATURES: [(&str, &str, &str, &str); 4] = [
    (
        "/map",
        "🗺️",
        "Map-Based Discovery",
        "Explore crafts by geographical regions on an interactive map",
    ),
    (
        "/products",
        "🏷️",
        "GI-Tagged Products",
        "Products organized by Geographical Indications for authenticity",
    ),
    (
        "/products",
        "🎨",
        "Cultural Stories",
        "Learn about the rich heritage and traditions behind each craft",
    ),
    (
        "/upload",
        "👨‍🎨",
        "Artisan-First",
        "Support rural artists with fair visibility and easy product uploads",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let stats = use_query(
        || (),
        |()| async { api::statistics().await.map_err(|e| e.user_message(STATS_FAILED_MESSAGE)) },
    );

    move || {
        let state = stats.get();
        if state.loading {
            return view! { <LoadingBlock message="Loading..."/> }.into_any();
        }
        if let Some(message) = state.error {
            return view! { <ErrorBlock message=message/> }.into_any();
        }
        view! {
            <div class="home">
                <section class="hero">
                    <h1>"Heritage Atlas"</h1>
                    <p>"Discover India's GI-Tagged Traditional Art Forms"</p>
                    <p class="hero__sub">"Explore traditional crafts organized by geographical regions and cultural heritage"</p>
                    <div class="hero__actions">
                        <a href="/products" class="btn btn-primary">"Browse Products"</a>
                        <a href="/map" class="btn btn-secondary">"Explore Map"</a>
                        <a href="/upload" class="btn btn-secondary">"Upload Product"</a>
                    </div>
                </section>
                {state.data.map(|stats| view! { <StatsSection stats=stats/> })}
                <section class="features">
                    <h2>"Platform Features"</h2>
                    <div class="feature-grid">
                        {FEATURES
                            .iter()
                            .map(|&(href, icon, title, body)| {
                                view! {
                                    <a href=href class="feature-card">
                                        <div class="feature-icon">{icon}</div>
                                        <h3>{title}</h3>
                                        <p>{body}</p>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </div>
        }
        .into_any()
    }
}

#[component]
fn StatsSection(stats: Statistics) -> impl IntoView {
    let cards = summary_cards(&stats);
    view! {
        <section class="stats">
            {cards
                .into_iter()
                .map(|(label, number)| {
                    view! {
                        <div class="stat-card">
                            <div class="stat-number">{number}</div>
                            <div class="stat-label">{label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
        <RankedList title="Top Regions" entries=stats.top_regions/>
        <RankedList title="Top GI Tags" entries=stats.top_gi_tags/>
    }
}

#[component]
fn RankedList(title: &'static str, entries: Vec<RankedCount>) -> impl IntoView {
    (!entries.is_empty()).then(|| {
        view! {
            <section class="ranked">
                <h3>{title}</h3>
                <ol>
                    {entries
                        .into_iter()
                        .map(|entry| view! { <li>{entry.name} " (" {entry.count} ")"</li> })
                        .collect_view()}
                </ol>
            </section>
        }
    })
}

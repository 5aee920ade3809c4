//! Static mission and feature overview.

use leptos::prelude::*;

const ABOUT_FEATURES: [(&str, &str, &str); 4] = [
    (
        "🗺️",
        "Geographical Organization",
        "Products are organized by cultural regions rather than generic categories, making it easier to discover crafts based on their geographical and cultural origins.",
    ),
    (
        "🏷️",
        "GI-Tagged Products",
        "All products are associated with their Geographical Indication tags, ensuring authenticity and preserving the cultural identity of traditional crafts.",
    ),
    (
        "📖",
        "Cultural Storytelling",
        "Each product includes cultural stories, history, and traditions, helping users understand the rich heritage behind every craft.",
    ),
    (
        "👨‍🎨",
        "Artisan-First Approach",
        "We prioritize the needs of artisans, especially those in rural areas, providing them with easy product uploads and fair visibility.",
    ),
];

const TECHNOLOGY: [(&str, &str); 5] = [
    ("Frontend:", "Rust and WebAssembly with server-side rendering for a responsive user interface"),
    ("Backend:", "High-performance HTTP API endpoints"),
    ("Database:", "Aggregation pipelines for efficient region-based filtering"),
    ("Maps:", "Interactive geographical exploration on OpenStreetMap tiles"),
    ("Deployment:", "Cloud hosting for scalable performance"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <div class="about-hero">
                <h1>"About Heritage Atlas"</h1>
                <p class="subtitle">"Preserving India's Traditional Art Forms Through Technology"</p>
            </div>
            <section class="about-section">
                <h2>"Our Mission"</h2>
                <p>
                    "Heritage Atlas is a digital marketplace dedicated to preserving and promoting India's Geographical Indication (GI)-tagged traditional art forms. We believe that every artisan deserves visibility and every traditional craft deserves recognition."
                </p>
            </section>
            <section class="about-section">
                <h2>"What We Do"</h2>
                <div class="features-list">
                    {ABOUT_FEATURES
                        .iter()
                        .map(|&(icon, title, body)| {
                            view! {
                                <div class="feature-item">
                                    <div class="feature-icon">{icon}</div>
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="about-section">
                <h2>"Technology"</h2>
                <p>"Heritage Atlas leverages modern web technologies to provide a fast, intuitive, and scalable platform:"</p>
                <ul class="tech-list">
                    {TECHNOLOGY
                        .iter()
                        .map(|&(label, text)| view! { <li><strong>{label}</strong> " " {text}</li> })
                        .collect_view()}
                </ul>
            </section>
            <section class="about-section">
                <h2>"Join Us"</h2>
                <p>
                    "Whether you're an artisan looking to showcase your work, a buyer interested in traditional crafts, or someone passionate about preserving cultural heritage, Heritage Atlas welcomes you."
                </p>
                <div class="cta-buttons">
                    <a href="/upload" class="btn btn-primary">"Upload Your Product"</a>
                    <a href="/products" class="btn btn-secondary">"Explore Products"</a>
                </div>
            </section>
        </div>
    }
}

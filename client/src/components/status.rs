//! Loading and error blocks shared by data-loading views.

use leptos::prelude::*;

#[component]
pub fn LoadingBlock(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="loading">{message}</div> }
}

/// Error text with an optional link out.
#[component]
pub fn ErrorBlock(
    #[prop(into)] message: Signal<String>,
    #[prop(optional, into)] back_href: Option<String>,
    #[prop(optional, into)] back_label: Option<String>,
) -> impl IntoView {
    let back = back_href.map(|href| {
        let label = back_label.unwrap_or_else(|| "Go back".to_owned());
        view! {
            <a href=href class="btn btn-primary">
                {label}
            </a>
        }
    });
    view! {
        <div class="error">
            <p>{move || message.get()}</p>
            {back}
        </div>
    }
}

//! Product upload form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Region and GI tag names are preloaded only as autocomplete hints; users
//! may enter new ones. A failed preload is logged and otherwise ignored.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::catalog::{gi_tag_names, region_names};
use crate::state::query::QueryScope;
use crate::state::session::LANDING_PATH;
use crate::state::upload::{REDIRECT_DELAY_MS, UploadField, UploadForm, UploadStatus, submission_outcome};
use crate::util::delay::sleep_ms;
use crate::util::query::use_query;

const REGIONS_LIST_ID: &str = "regions-list";
const GI_TAGS_LIST_ID: &str = "gi-tags-list";

/// Autocomplete sources for the region and GI tag inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadOptions {
    pub regions: Vec<String>,
    pub gi_tags: Vec<String>,
}

pub async fn load_upload_options() -> Result<UploadOptions, String> {
    let (regions, gi_tags) = futures::join!(api::list_regions(), api::list_gi_tags());
    let regions = regions.map_err(|err| format!("Failed to load options: {err}"))?;
    let gi_tags = gi_tags.map_err(|err| format!("Failed to load options: {err}"))?;
    Ok(UploadOptions {
        regions: region_names(&regions),
        gi_tags: gi_tag_names(&gi_tags),
    })
}

/// Rendering hints for one form control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputSpec {
    pub kind: &'static str,
    pub placeholder: &'static str,
    pub step: Option<&'static str>,
    /// Text areas carry a row count; everything else is an `<input>`.
    pub rows: Option<u8>,
}

pub fn input_spec(field: UploadField) -> InputSpec {
    let text = |placeholder| InputSpec {
        kind: "text",
        placeholder,
        step: None,
        rows: None,
    };
    match field {
        UploadField::Name => text("e.g., Kondapalli Bommalu"),
        UploadField::Category => text("e.g., Traditional Craft"),
        UploadField::Description => InputSpec {
            rows: Some(4),
            ..text("Describe the product, its features, and significance...")
        },
        UploadField::GiTag => text("e.g., Kondapalli, Kalamkari"),
        UploadField::Region => text("e.g., Andhra Pradesh"),
        UploadField::ArtisanName => text("Name of the artisan"),
        UploadField::ArtisanContact => text("Phone or email"),
        UploadField::Price => InputSpec {
            kind: "number",
            step: Some("0.01"),
            ..text("0.00")
        },
        UploadField::ImageUrl => InputSpec {
            kind: "url",
            ..text("https://example.com/image.jpg")
        },
        UploadField::Latitude => InputSpec {
            kind: "number",
            step: Some("any"),
            ..text("e.g., 17.3850")
        },
        UploadField::Longitude => InputSpec {
            kind: "number",
            step: Some("any"),
            ..text("e.g., 78.4867")
        },
        UploadField::CulturalStory => InputSpec {
            rows: Some(5),
            ..text("Share the cultural significance, history, or tradition behind this craft...")
        },
    }
}

/// Form rows in display order; a single-entry row spans the full width.
pub const FORM_ROWS: [&[UploadField]; 7] = [
    &[UploadField::Name, UploadField::Category],
    &[UploadField::Description],
    &[UploadField::GiTag, UploadField::Region],
    &[UploadField::ArtisanName, UploadField::ArtisanContact],
    &[UploadField::Price, UploadField::ImageUrl],
    &[UploadField::Latitude, UploadField::Longitude],
    &[UploadField::CulturalStory],
];

#[component]
pub fn UploadPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(UploadForm::default());
    let status = RwSignal::new(UploadStatus::default());
    let options = use_query(|| (), |()| load_upload_options());

    let submissions = QueryScope::new();
    let cleanup_scope = submissions.clone();
    on_cleanup(move || cleanup_scope.close());

    let cancel_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(|s| s.submitting) {
            return;
        }
        let payload = match form.with_untracked(UploadForm::payload) {
            Ok(payload) => payload,
            Err(err) => {
                status.update(|s| s.fail(err.to_string()));
                return;
            }
        };
        status.update(UploadStatus::begin);
        let ticket = submissions.issue();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = submission_outcome(api::create_product(&payload).await);
            if !ticket.is_current() {
                return;
            }
            match outcome {
                Ok(()) => {
                    status.update(UploadStatus::succeed);
                    form.set(UploadForm::default());
                    sleep_ms(REDIRECT_DELAY_MS).await;
                    if ticket.is_current() {
                        navigate(LANDING_PATH, NavigateOptions::default());
                    }
                }
                Err(message) => {
                    leptos::logging::warn!("upload failed: {message}");
                    status.update(|s| s.fail(message));
                }
            }
        });
    };

    let region_hints = move || options.with(|state| state.data.as_ref().map(|data| data.regions.clone()));
    let gi_tag_hints = move || options.with(|state| state.data.as_ref().map(|data| data.gi_tags.clone()));

    view! {
        <div class="upload-product">
            <h1>"Upload Product"</h1>
            <p class="upload-product__intro">"Share your traditional craft with the Heritage Atlas community"</p>
            <Show when=move || status.with(|s| s.success)>
                <div class="success-message">"✅ Product uploaded successfully! Redirecting..."</div>
            </Show>
            {move || status.with(|s| s.error.clone()).map(|error| view! { <div class="error-message">"❌ " {error}</div> })}
            <form class="upload-form" on:submit=on_submit>
                {FORM_ROWS
                    .iter()
                    .map(|row| {
                        let fields = row
                            .iter()
                            .map(|&field| view! { <FieldInput field=field form=form/> })
                            .collect_view();
                        if row.len() > 1 {
                            view! { <div class="form-row">{fields}</div> }.into_any()
                        } else {
                            fields.into_any()
                        }
                    })
                    .collect_view()}
                <datalist id=GI_TAGS_LIST_ID>{move || hint_options(gi_tag_hints())}</datalist>
                <datalist id=REGIONS_LIST_ID>{move || hint_options(region_hints())}</datalist>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || status.with(|s| s.submitting)>
                        {move || if status.with(|s| s.submitting) { "Uploading..." } else { "Upload Product" }}
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| cancel_navigate("/products", NavigateOptions::default())
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}

fn hint_options(values: Option<Vec<String>>) -> AnyView {
    values
        .unwrap_or_default()
        .into_iter()
        .map(|value| view! { <option value=value></option> })
        .collect_view()
        .into_any()
}

#[component]
fn FieldInput(field: UploadField, form: RwSignal<UploadForm>) -> impl IntoView {
    let spec = input_spec(field);
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_owned()
    };
    let list = match field {
        UploadField::GiTag => Some(GI_TAGS_LIST_ID),
        UploadField::Region => Some(REGIONS_LIST_ID),
        _ => None,
    };
    let value = move || form.with(|f| f.get(field).to_owned());

    let control = match spec.rows {
        Some(rows) => view! {
            <textarea
                id=field.key()
                name=field.key()
                rows=rows
                placeholder=spec.placeholder
                required=field.is_required()
                prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            ></textarea>
        }
            .into_any(),
        None => view! {
            <input
                type=spec.kind
                id=field.key()
                name=field.key()
                placeholder=spec.placeholder
                step=spec.step
                list=list
                required=field.is_required()
                prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        }
            .into_any(),
    };

    view! {
        <div class="form-group">
            <label for=field.key()>{label}</label>
            {control}
        </div>
    }
}

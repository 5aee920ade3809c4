//! Upload form model and submission payload.
//!
//! Required fields are enforced by `required` attributes on the inputs; the
//! checks here run again before submit so a payload missing one never leaves
//! the browser.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use thiserror::Error;

use crate::net::error::ApiError;
use crate::net::types::CreateProductResponse;

/// Delay before returning to the landing view after a successful upload.
pub const REDIRECT_DELAY_MS: u64 = 1500;

pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload product. Please check all required fields.";

/// Every field of the upload form, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadField {
    Name,
    Category,
    Description,
    GiTag,
    Region,
    ArtisanName,
    ArtisanContact,
    Price,
    ImageUrl,
    Latitude,
    Longitude,
    CulturalStory,
}

impl UploadField {
    pub const ALL: [Self; 12] = [
        Self::Name,
        Self::Category,
        Self::Description,
        Self::GiTag,
        Self::Region,
        Self::ArtisanName,
        Self::ArtisanContact,
        Self::Price,
        Self::ImageUrl,
        Self::Latitude,
        Self::Longitude,
        Self::CulturalStory,
    ];

    /// Multipart part name.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Description => "description",
            Self::GiTag => "gi_tag",
            Self::Region => "region",
            Self::ArtisanName => "artisan_name",
            Self::ArtisanContact => "artisan_contact",
            Self::Price => "price",
            Self::ImageUrl => "image_url",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::CulturalStory => "cultural_story",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Product Name",
            Self::Category => "Category",
            Self::Description => "Description",
            Self::GiTag => "GI Tag",
            Self::Region => "Region",
            Self::ArtisanName => "Artisan Name",
            Self::ArtisanContact => "Artisan Contact",
            Self::Price => "Price (₹)",
            Self::ImageUrl => "Image URL",
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
            Self::CulturalStory => "Cultural Story",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            Self::Name | Self::Description | Self::GiTag | Self::Region | Self::ArtisanName
        )
    }

    fn is_numeric(self) -> bool {
        matches!(self, Self::Price | Self::Latitude | Self::Longitude)
    }
}

/// Client-side validation failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("{0} is required.")]
    MissingField(&'static str),
    #[error("{0} must be a number.")]
    InvalidNumber(&'static str),
}

/// Raw text of every form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub name: String,
    pub category: String,
    pub description: String,
    pub gi_tag: String,
    pub region: String,
    pub artisan_name: String,
    pub artisan_contact: String,
    pub price: String,
    pub image_url: String,
    pub latitude: String,
    pub longitude: String,
    pub cultural_story: String,
}

impl UploadForm {
    pub fn get(&self, field: UploadField) -> &str {
        match field {
            UploadField::Name => &self.name,
            UploadField::Category => &self.category,
            UploadField::Description => &self.description,
            UploadField::GiTag => &self.gi_tag,
            UploadField::Region => &self.region,
            UploadField::ArtisanName => &self.artisan_name,
            UploadField::ArtisanContact => &self.artisan_contact,
            UploadField::Price => &self.price,
            UploadField::ImageUrl => &self.image_url,
            UploadField::Latitude => &self.latitude,
            UploadField::Longitude => &self.longitude,
            UploadField::CulturalStory => &self.cultural_story,
        }
    }

    pub fn set(&mut self, field: UploadField, value: String) {
        let slot = match field {
            UploadField::Name => &mut self.name,
            UploadField::Category => &mut self.category,
            UploadField::Description => &mut self.description,
            UploadField::GiTag => &mut self.gi_tag,
            UploadField::Region => &mut self.region,
            UploadField::ArtisanName => &mut self.artisan_name,
            UploadField::ArtisanContact => &mut self.artisan_contact,
            UploadField::Price => &mut self.price,
            UploadField::ImageUrl => &mut self.image_url,
            UploadField::Latitude => &mut self.latitude,
            UploadField::Longitude => &mut self.longitude,
            UploadField::CulturalStory => &mut self.cultural_story,
        };
        *slot = value;
    }

    /// Multipart fields to send: trimmed values, empty fields dropped.
    ///
    /// # Errors
    ///
    /// Returns the first missing required field, or a numeric field that does
    /// not parse.
    pub fn payload(&self) -> Result<Vec<(&'static str, String)>, UploadError> {
        let mut fields = Vec::new();
        for field in UploadField::ALL {
            let value = self.get(field).trim();
            if value.is_empty() {
                if field.is_required() {
                    return Err(UploadError::MissingField(field.label()));
                }
                continue;
            }
            if field.is_numeric() && !value.parse::<f64>().is_ok_and(f64::is_finite) {
                return Err(UploadError::InvalidNumber(field.label()));
            }
            fields.push((field.key(), value.to_owned()));
        }
        Ok(fields)
    }
}

/// Submission lifecycle for the upload view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadStatus {
    pub submitting: bool,
    pub success: bool,
    pub error: Option<String>,
}

impl UploadStatus {
    pub fn begin(&mut self) {
        self.submitting = true;
        self.success = false;
        self.error = None;
    }

    pub fn succeed(&mut self) {
        self.submitting = false;
        self.success = true;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.submitting = false;
        self.success = false;
        self.error = Some(message);
    }
}

/// Collapse a create call into success or the text to show.
///
/// A rejected body (`success: false`) counts as a failure and surfaces its
/// `message` when one is given.
///
/// # Errors
///
/// Returns the user-facing failure text.
pub fn submission_outcome(result: Result<CreateProductResponse, ApiError>) -> Result<(), String> {
    match result {
        Ok(response) if response.success => Ok(()),
        Ok(response) => Err(response
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| UPLOAD_FAILED_MESSAGE.to_owned())),
        Err(err) => Err(err.user_message(UPLOAD_FAILED_MESSAGE)),
    }
}

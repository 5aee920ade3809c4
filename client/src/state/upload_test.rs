use super::*;

fn required_only() -> UploadForm {
    UploadForm {
        name: "Kondapalli Bommalu".to_owned(),
        description: "Softwood toys painted with natural dyes".to_owned(),
        gi_tag: "Kondapalli".to_owned(),
        region: "Andhra Pradesh".to_owned(),
        artisan_name: "Ravi".to_owned(),
        ..UploadForm::default()
    }
}

// =============================================================
// Payload
// =============================================================

#[test]
fn required_only_form_sends_exactly_required_fields() {
    let payload = required_only().payload().unwrap();
    let keys: Vec<&str> = payload.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["name", "description", "gi_tag", "region", "artisan_name"]);
}

#[test]
fn whitespace_only_optional_fields_are_omitted() {
    let mut form = required_only();
    form.category = "   ".to_owned();
    form.cultural_story = "\n\t".to_owned();
    let payload = form.payload().unwrap();
    assert!(payload.iter().all(|(k, _)| *k != "category" && *k != "cultural_story"));
}

#[test]
fn populated_optional_fields_are_sent_trimmed() {
    let mut form = required_only();
    form.price = " 1250.50 ".to_owned();
    form.latitude = "16.6186".to_owned();
    form.longitude = "80.5402".to_owned();
    form.image_url = "https://img.example/toy.jpg".to_owned();
    let payload = form.payload().unwrap();
    assert!(payload.contains(&("price", "1250.50".to_owned())));
    assert!(payload.contains(&("latitude", "16.6186".to_owned())));
    assert!(payload.contains(&("longitude", "80.5402".to_owned())));
    assert!(payload.contains(&("image_url", "https://img.example/toy.jpg".to_owned())));
    assert_eq!(payload.len(), 9);
}

#[test]
fn missing_required_field_is_reported_in_form_order() {
    let mut form = required_only();
    form.description.clear();
    form.region = "  ".to_owned();
    assert_eq!(form.payload(), Err(UploadError::MissingField("Description")));
}

#[test]
fn non_numeric_price_is_rejected() {
    let mut form = required_only();
    form.price = "twelve".to_owned();
    let err = form.payload().unwrap_err();
    assert_eq!(err, UploadError::InvalidNumber("Price (₹)"));
    assert_eq!(err.to_string(), "Price (₹) must be a number.");
}

#[test]
fn empty_form_reports_name_first() {
    let err = UploadForm::default().payload().unwrap_err();
    assert_eq!(err.to_string(), "Product Name is required.");
}

// =============================================================
// Field access
// =============================================================

#[test]
fn set_then_get_round_trips_every_field() {
    let mut form = UploadForm::default();
    for field in UploadField::ALL {
        form.set(field, field.key().to_owned());
    }
    for field in UploadField::ALL {
        assert_eq!(form.get(field), field.key());
    }
}

#[test]
fn five_fields_are_required() {
    let required = UploadField::ALL.iter().filter(|f| f.is_required()).count();
    assert_eq!(required, 5);
}

// =============================================================
// Status
// =============================================================

#[test]
fn status_failure_clears_submitting() {
    let mut status = UploadStatus::default();
    status.begin();
    assert!(status.submitting);
    status.fail(UPLOAD_FAILED_MESSAGE.to_owned());
    assert!(!status.submitting);
    assert!(!status.success);
    assert_eq!(status.error.as_deref(), Some(UPLOAD_FAILED_MESSAGE));
}

#[test]
fn status_success_clears_submitting() {
    let mut status = UploadStatus::default();
    status.begin();
    status.succeed();
    assert!(status.success);
    assert!(!status.submitting);
    assert_eq!(status.error, None);
}

#[test]
fn status_begin_clears_previous_error() {
    let mut status = UploadStatus::default();
    status.fail("boom".to_owned());
    status.begin();
    assert_eq!(status.error, None);
    status.succeed();
    assert!(status.success);
}

// =============================================================
// Submission outcome
// =============================================================

fn response(success: bool, message: Option<&str>) -> CreateProductResponse {
    CreateProductResponse {
        success,
        message: message.map(str::to_owned),
        product: None,
    }
}

#[test]
fn accepted_response_is_success() {
    assert_eq!(submission_outcome(Ok(response(true, None))), Ok(()));
}

#[test]
fn rejected_body_uses_message_or_fallback() {
    assert_eq!(
        submission_outcome(Ok(response(false, Some("Duplicate product")))),
        Err("Duplicate product".to_owned())
    );
    assert_eq!(
        submission_outcome(Ok(response(false, None))),
        Err(UPLOAD_FAILED_MESSAGE.to_owned())
    );
}

#[test]
fn backend_detail_is_shown_verbatim() {
    let err = ApiError::from_status(400, r#"{"detail": "Region is required"}"#);
    assert_eq!(submission_outcome(Err(err)), Err("Region is required".to_owned()));
}

#[test]
fn transport_failure_uses_fallback() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(submission_outcome(Err(err)), Err(UPLOAD_FAILED_MESSAGE.to_owned()));
}

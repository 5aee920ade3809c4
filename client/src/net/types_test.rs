use super::*;

// =============================================================
// Product
// =============================================================

fn product_json() -> serde_json::Value {
    serde_json::json!({
        "_id": "65f0c0ffee",
        "name": "Kondapalli Bommalu",
        "description": "Wooden toys",
        "gi_tag": "Kondapalli",
        "region": "Andhra Pradesh",
        "artisan_name": "Ravi",
        "price": 1250.0,
        "location": { "latitude": 16.6186, "longitude": 80.5402 },
        "is_active": true,
        "views": 12
    })
}

#[test]
fn product_reads_underscore_id_and_ignores_unknown_fields() {
    let product: Product = serde_json::from_value(product_json()).unwrap();
    assert_eq!(product.id, "65f0c0ffee");
    assert_eq!(product.gi_tag, "Kondapalli");
    assert_eq!(product.price, Some(1250.0));
    assert_eq!(product.is_active, Some(true));
    assert_eq!(product.artisan_contact, None);
}

#[test]
fn product_accepts_plain_id_alias() {
    let mut value = product_json();
    let id = value.as_object_mut().unwrap().remove("_id").unwrap();
    value["id"] = id;
    let product: Product = serde_json::from_value(value).unwrap();
    assert_eq!(product.id, "65f0c0ffee");
}

#[test]
fn product_serializes_id_as_underscore_id() {
    let product: Product = serde_json::from_value(product_json()).unwrap();
    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["_id"], "65f0c0ffee");
    assert!(json.get("id").is_none());
}

#[test]
fn product_coordinates_require_both_fields() {
    let mut product: Product = serde_json::from_value(product_json()).unwrap();
    assert_eq!(product.coordinates(), Some(GeoPoint::new(16.6186, 80.5402)));

    product.location = Some(Location { latitude: Some(16.6), longitude: None });
    assert_eq!(product.coordinates(), None);

    product.location = None;
    assert_eq!(product.coordinates(), None);
}

#[test]
fn product_coordinates_keep_zero_values() {
    let product = Product {
        location: Some(Location { latitude: Some(0.0), longitude: Some(0.0) }),
        ..Product::default()
    };
    assert_eq!(product.coordinates(), Some(GeoPoint::new(0.0, 0.0)));
}

#[test]
fn product_image_treats_blank_as_missing() {
    let mut product = Product::default();
    assert_eq!(product.image(), None);
    product.image_url = Some("   ".to_owned());
    assert_eq!(product.image(), None);
    product.image_url = Some(" https://img.example/a.jpg ".to_owned());
    assert_eq!(product.image(), Some("https://img.example/a.jpg"));
}

// =============================================================
// Aggregates
// =============================================================

#[test]
fn region_defaults_missing_collections() {
    let region: Region = serde_json::from_value(serde_json::json!({
        "region": "Odisha",
        "count": 3
    }))
    .unwrap();
    assert_eq!(region.count, 3);
    assert!(region.gi_tags.is_empty());
    assert!(region.products.is_empty());
    assert_eq!(region.location, None);
}

#[test]
fn region_count_accepts_integral_float() {
    let region: Region = serde_json::from_value(serde_json::json!({
        "region": "Odisha",
        "count": 4.0
    }))
    .unwrap();
    assert_eq!(region.count, 4);
}

#[test]
fn region_count_rejects_fractional_value() {
    let result = serde_json::from_value::<Region>(serde_json::json!({
        "region": "Odisha",
        "count": 4.5
    }));
    assert!(result.is_err());
}

#[test]
fn gi_tag_decodes_regions_and_products() {
    let tag: GiTag = serde_json::from_value(serde_json::json!({
        "gi_tag": "Pochampally Ikat",
        "count": 2,
        "regions": ["Telangana"],
        "products": [product_json()]
    }))
    .unwrap();
    assert_eq!(tag.regions, vec!["Telangana".to_owned()]);
    assert_eq!(tag.products.len(), 1);
}

#[test]
fn statistics_decodes_top_breakdowns() {
    let stats: StatisticsResponse = serde_json::from_value(serde_json::json!({
        "statistics": {
            "total_products": 42,
            "unique_regions": 7,
            "unique_gi_tags": 11,
            "unique_artisans": 30,
            "top_regions": [{ "_id": "Odisha", "count": 9 }],
            "top_gi_tags": []
        }
    }))
    .unwrap();
    assert_eq!(stats.statistics.total_products, 42);
    assert_eq!(stats.statistics.top_regions[0].name, "Odisha");
    assert_eq!(stats.statistics.top_regions[0].count, 9);
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn product_list_response_defaults_to_empty() {
    let body: ProductListResponse = serde_json::from_value(serde_json::json!({ "total": 0 })).unwrap();
    assert!(body.products.is_empty());
}

#[test]
fn product_response_allows_null_product() {
    let body: ProductResponse = serde_json::from_value(serde_json::json!({ "product": null })).unwrap();
    assert_eq!(body.product, None);
}

#[test]
fn create_product_response_reads_success_flag() {
    let body: CreateProductResponse =
        serde_json::from_value(serde_json::json!({ "success": true, "message": "created" })).unwrap();
    assert!(body.success);
    assert_eq!(body.message.as_deref(), Some("created"));
}

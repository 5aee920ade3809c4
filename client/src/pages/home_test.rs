use super::*;

#[test]
fn summary_cards_render_counts_verbatim() {
    let stats = Statistics {
        total_products: 42,
        unique_regions: 7,
        unique_gi_tags: 11,
        unique_artisans: 30,
        ..Statistics::default()
    };
    let cards = summary_cards(&stats);
    assert_eq!(
        cards,
        [
            ("Total Products", "42".to_owned()),
            ("Regions", "7".to_owned()),
            ("GI Tags", "11".to_owned()),
            ("Artisans", "30".to_owned()),
        ]
    );
}

#[test]
fn summary_cards_from_wire_payload() {
    let body = serde_json::json!({
        "statistics": {
            "total_products": 42,
            "unique_regions": 7,
            "unique_gi_tags": 11,
            "unique_artisans": 30,
            "top_regions": [{"_id": "Kerala", "count": 9}],
            "top_gi_tags": []
        }
    });
    let parsed: crate::net::types::StatisticsResponse = serde_json::from_value(body).unwrap();
    let numbers: Vec<String> = summary_cards(&parsed.statistics).into_iter().map(|(_, n)| n).collect();
    assert_eq!(numbers, vec!["42", "7", "11", "30"]);
}

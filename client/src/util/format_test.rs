use super::*;

#[test]
fn price_groups_thousands() {
    assert_eq!(format_price(1_250_000.0), "₹1,250,000");
    assert_eq!(format_price(999.0), "₹999");
    assert_eq!(format_price(1000.0), "₹1,000");
}

#[test]
fn price_keeps_up_to_three_fraction_digits() {
    assert_eq!(format_price(1250.5), "₹1,250.5");
    assert_eq!(format_price(12.3456), "₹12.346");
    assert_eq!(format_price(0.0), "₹0");
}

#[test]
fn negative_values_keep_sign() {
    assert_eq!(group_number(-4500.25), "-4,500.25");
    assert_eq!(group_number(-0.0), "0");
}

#[test]
fn coordinates_use_four_decimals() {
    assert_eq!(format_coordinate(17.385), "17.3850");
    assert_eq!(format_coordinate(78.486_71), "78.4867");
}

#[test]
fn non_blank_filters_whitespace() {
    assert_eq!(non_blank(Some("  ")), None);
    assert_eq!(non_blank(None), None);
    assert_eq!(non_blank(Some(" +91 98 ")), Some("+91 98"));
}

#[test]
fn encode_component_escapes_spaces_and_reserved() {
    assert_eq!(encode_component("Andhra Pradesh"), "Andhra%20Pradesh");
    assert_eq!(encode_component("J&K"), "J%26K");
    assert_eq!(encode_component("plain-name_1"), "plain-name_1");
}

#[test]
fn encode_component_handles_multibyte() {
    assert_eq!(encode_component("₹"), "%E2%82%B9");
}

use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn failed_reads_collapse_to_one_message() {
    let result = futures::executor::block_on(load_catalog(ProductFilters::default()));
    assert_eq!(result, Err(PRODUCTS_FAILED_MESSAGE.to_owned()));
}

#[test]
fn region_link_seeds_only_the_region_filter() {
    let filters = ProductFilters::for_region(Some("Kerala".to_owned()));
    assert_eq!(filters.get(FilterField::Region), "Kerala");
    assert_eq!(filters.get(FilterField::GiTag), "");
    assert_eq!(filters.query_pairs(), vec![("region", "Kerala".to_owned())]);
}

#[test]
fn option_rows_mark_only_the_active_value() {
    let rows = option_rows(vec!["Kerala".to_owned(), "Odisha".to_owned()], "Odisha");
    assert_eq!(rows, vec![("Kerala".to_owned(), false), ("Odisha".to_owned(), true)]);
}

#[test]
fn option_rows_with_no_selection_mark_nothing() {
    let rows = option_rows(vec!["Kerala".to_owned()], "");
    assert!(rows.iter().all(|(_, selected)| !selected));
}

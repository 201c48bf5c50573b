use super::*;
use crate::city::City;
use crate::geo::{haversine_km, Coordinates};

fn make_listing(id: usize, name: &str) -> Listing {
    Listing {
        id: id.to_string(),
        name: name.to_owned(),
        image: None,
        rating: Some(4.5),
        prep_time_minutes: Some(25),
        location_label: "Mumbai".to_owned(),
        coordinates: Some(Coordinates::new(19.10, 72.90)),
    }
}

fn make_listings(n: usize) -> Vec<Listing> {
    (1..=n).map(|i| make_listing(i, &format!("Dish {i}"))).collect()
}

// -----------------------------------------------------------------------
// filter_listings
// -----------------------------------------------------------------------

#[test]
fn empty_query_matches_everything() {
    let listings = make_listings(4);
    assert_eq!(filter_listings(&listings, "").len(), 4);
}

#[test]
fn filter_is_case_insensitive_substring() {
    let listings = vec![
        make_listing(1, "Classic Margherita Pizza"),
        make_listing(2, "Vegetarian Stir-Fry"),
        make_listing(3, "PIZZA Bianca"),
    ];
    let names: Vec<&str> = filter_listings(&listings, "pIzZa")
        .iter()
        .map(|l| l.name.as_str())
        .collect();
    assert_eq!(names, vec!["Classic Margherita Pizza", "PIZZA Bianca"]);
}

#[test]
fn filter_preserves_order() {
    let listings = make_listings(12);
    let ids: Vec<&str> = filter_listings(&listings, "dish 1")
        .iter()
        .map(|l| l.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "10", "11", "12"]);
}

// -----------------------------------------------------------------------
// page_count / page_slice
// -----------------------------------------------------------------------

#[test]
fn page_count_has_minimum_of_one() {
    assert_eq!(page_count(0, 15), 1);
    assert_eq!(page_count(1, 15), 1);
    assert_eq!(page_count(15, 15), 1);
    assert_eq!(page_count(16, 15), 2);
    assert_eq!(page_count(37, 15), 3);
    assert_eq!(page_count(180, 15), 12);
}

#[test]
fn pages_concatenate_to_filtered_set() {
    for n in [0usize, 1, 14, 15, 16, 30, 37, 181] {
        let items: Vec<usize> = (0..n).collect();
        let pages = page_count(n, 15);
        let joined: Vec<usize> = (1..=pages)
            .flat_map(|p| page_slice(&items, p, 15).iter().copied())
            .collect();
        assert_eq!(joined, items, "n = {n}");
    }
}

#[test]
fn page_slice_last_page_is_partial() {
    let items: Vec<usize> = (0..37).collect();
    assert_eq!(page_slice(&items, 3, 15), &items[30..37]);
}

#[test]
fn page_slice_zero_page_is_empty() {
    let items: Vec<usize> = (0..37).collect();
    assert!(page_slice(&items, 0, 15).is_empty());
}

#[test]
fn page_slice_out_of_range_is_empty() {
    let items: Vec<usize> = (0..10).collect();
    assert!(page_slice(&items, 5, 15).is_empty());
}

// -----------------------------------------------------------------------
// page_items
// -----------------------------------------------------------------------

fn pages(ns: &[usize]) -> Vec<PageItem> {
    ns.iter().copied().map(PageItem::Page).collect()
}

#[test]
fn small_page_counts_list_every_page() {
    assert_eq!(page_items(1, 1), pages(&[1]));
    assert_eq!(page_items(1, 3), pages(&[1, 2, 3]));
    assert_eq!(page_items(4, 5), pages(&[1, 2, 3, 4, 5]));
}

#[test]
fn middle_page_has_ellipsis_on_both_sides() {
    use PageItem::{Ellipsis, Page};
    assert_eq!(
        page_items(6, 12),
        vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(12)]
    );
}

#[test]
fn first_page_window() {
    use PageItem::{Ellipsis, Page};
    assert_eq!(page_items(1, 12), vec![Page(1), Page(2), Ellipsis, Page(12)]);
}

#[test]
fn last_page_window() {
    use PageItem::{Ellipsis, Page};
    assert_eq!(page_items(12, 12), vec![Page(1), Ellipsis, Page(11), Page(12)]);
}

#[test]
fn window_contiguous_with_first_page_has_no_leading_ellipsis() {
    use PageItem::{Ellipsis, Page};
    assert_eq!(
        page_items(3, 6),
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(6)]
    );
}

#[test]
fn page_item_display_and_json() {
    assert_eq!(PageItem::Page(7).to_string(), "7");
    assert_eq!(PageItem::Ellipsis.to_string(), "...");
    let json = serde_json::to_string(&page_items(6, 12)).unwrap();
    assert_eq!(json, r#"[1,"...",5,6,7,"...",12]"#);
}

// -----------------------------------------------------------------------
// PageView
// -----------------------------------------------------------------------

#[test]
fn view_reports_range_and_navigation() {
    let listings = make_listings(37);
    let view = PageView::build(&listings, "", CityFilter::All, 3, 15, true);
    assert_eq!(view.total, 37);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.range_start, 31);
    assert_eq!(view.range_end, 37);
    assert_eq!(view.rows.len(), 7);
    assert!(view.has_prev);
    assert!(!view.has_next);
    assert_eq!(view.page_items, pages(&[1, 2, 3]));
    assert_eq!(view.heading, "Restaurants");
}

#[test]
fn view_without_city_has_no_distances() {
    let listings = make_listings(3);
    let view = PageView::build(&listings, "", CityFilter::All, 1, 15, true);
    assert!(view.rows.iter().all(|r| r.distance_km.is_none()));
}

#[test]
fn view_with_city_annotates_haversine_distance() {
    let listings = make_listings(3);
    let view = PageView::build(&listings, "", CityFilter::City(City::Mumbai), 1, 15, true);
    let expected = haversine_km(City::Mumbai.coordinates(), Coordinates::new(19.10, 72.90));
    for row in &view.rows {
        let d = row.distance_km.expect("distance for listing with coordinates");
        assert!((d - expected).abs() < 1e-9);
    }
    assert_eq!(view.heading, "Mumbai Restaurants");
}

#[test]
fn view_rows_resolve_display_image() {
    let mut listings = make_listings(2);
    listings[1].image = Some("https://img.example/tikka.jpg".to_owned());
    let view = PageView::build(&listings, "", CityFilter::All, 1, 15, true);
    assert_eq!(view.rows[0].display_image, crate::listing::PLACEHOLDER_IMAGE);
    assert_eq!(view.rows[1].display_image, "https://img.example/tikka.jpg");

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(
        json["rows"][0]["display_image"],
        crate::listing::PLACEHOLDER_IMAGE
    );
    assert!(json["rows"][0]["image"].is_null());
}

#[test]
fn view_no_results_hides_page_buttons() {
    let listings = make_listings(20);
    let view = PageView::build(&listings, "sushi", CityFilter::All, 1, 15, true);
    assert!(view.no_results);
    assert!(view.rows.is_empty());
    assert!(view.page_items.is_empty());
    assert_eq!(view.range_start, 0);
    assert_eq!(view.range_end, 0);
}

#[test]
fn view_of_page_zero_has_no_rows() {
    let listings = make_listings(100);
    let view = PageView::build(&listings, "", CityFilter::All, 0, 15, true);
    assert!(view.rows.is_empty());
    assert_eq!(view.range_start, 0);
    assert_eq!(view.range_end, 0);
    assert!(!view.has_prev);
    assert!(view.has_next);
}

#[test]
fn view_of_huge_page_has_no_rows() {
    let listings = make_listings(100);
    let view = PageView::build(&listings, "", CityFilter::All, usize::MAX, 15, true);
    assert!(view.rows.is_empty());
    assert_eq!(view.range_start, 0);
    assert_eq!(view.range_end, 0);
    assert!(!view.has_next);
    assert_eq!(view.page_items, vec![PageItem::Page(1), PageItem::Ellipsis, PageItem::Page(7)]);
}

#[test]
fn page_items_tolerate_extreme_current_page() {
    use PageItem::{Ellipsis, Page};
    assert_eq!(page_items(0, 12), vec![Page(1), Ellipsis, Page(12)]);
    assert_eq!(page_items(usize::MAX, 12), vec![Page(1), Ellipsis, Page(12)]);
}

#[test]
fn view_of_empty_listing_set_is_not_no_results() {
    let view = PageView::build(&[], "", CityFilter::All, 1, 15, false);
    assert!(!view.no_results);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.page_items, pages(&[1]));
}

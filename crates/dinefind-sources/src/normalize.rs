//! Normalization from the two wire shapes into [`dinefind_core::Listing`].
//!
//! Normalization never fails: every missing or malformed optional field
//! degrades to a documented default. Live-source ratings and prep times are
//! synthesized from the caller's RNG so a seeded generator reproduces them.

use dinefind_core::{placeholder_search_url, City, Coordinates, Listing};
use rand::Rng;

use crate::types::{CatalogRecord, OverpassElement};

const UNNAMED_CATALOG_ITEM: &str = "Unnamed";
const UNNAMED_RESTAURANT: &str = "Unnamed Restaurant";

/// Synthesized ratings fall in `[3.0, 5.0]` at one decimal.
const RATING_MIN: f64 = 3.0;
const RATING_SPAN: f64 = 2.0;

/// Synthesized prep times fall in `[15, 45)` minutes.
const PREP_TIME_MINUTES: std::ops::Range<u32> = 15..45;

/// Maps default-catalog records 1:1, assigning cities round-robin by position.
#[must_use]
pub fn normalize_catalog(records: Vec<CatalogRecord>) -> Vec<Listing> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| normalize_catalog_record(record, index))
        .collect()
}

fn normalize_catalog_record(record: CatalogRecord, index: usize) -> Listing {
    let city = City::round_robin(index);

    let name = non_blank(record.name).unwrap_or_else(|| UNNAMED_CATALOG_ITEM.to_owned());
    let image = non_blank(record.image).unwrap_or_else(|| placeholder_search_url(record.id));

    Listing {
        id: record.id.to_string(),
        name,
        image: Some(image),
        rating: record.rating,
        prep_time_minutes: record.cook_time_minutes,
        location_label: city.name().to_owned(),
        coordinates: Some(city.coordinates()),
    }
}

/// Maps live proximity-query elements found around `city`.
pub fn normalize_elements<R>(elements: Vec<OverpassElement>, city: City, rng: &mut R) -> Vec<Listing>
where
    R: Rng + ?Sized,
{
    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| normalize_element(element, index, city, rng))
        .collect()
}

fn normalize_element<R>(element: OverpassElement, index: usize, city: City, rng: &mut R) -> Listing
where
    R: Rng + ?Sized,
{
    let coordinates = element_coordinates(&element);
    let tags = element.tags.unwrap_or_default();

    // A zero id is treated like a missing one for the image key.
    let image_key = element
        .id
        .filter(|id| *id != 0)
        .map_or_else(|| index.to_string(), |id| id.to_string());

    let image = match tags.image {
        Some(serde_json::Value::String(url)) if !url.trim().is_empty() => url,
        _ => placeholder_search_url(image_key),
    };

    Listing {
        id: element
            .id
            .map_or_else(|| format!("element-{index}"), |id| id.to_string()),
        name: non_blank(tags.name).unwrap_or_else(|| UNNAMED_RESTAURANT.to_owned()),
        image: Some(image),
        rating: Some(synthesize_rating(rng)),
        prep_time_minutes: Some(synthesize_prep_time(rng)),
        location_label: city.name().to_owned(),
        coordinates,
    }
}

/// `round((u * 2 + 3) * 10) / 10` for `u` uniform in `[0, 1)`.
pub fn synthesize_rating<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u: f64 = rng.random();
    ((u * RATING_SPAN + RATING_MIN) * 10.0).round() / 10.0
}

pub fn synthesize_prep_time<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(PREP_TIME_MINUTES)
}

/// Nodes report `lat`/`lon`; ways and relations only report a `center`.
fn element_coordinates(element: &OverpassElement) -> Option<Coordinates> {
    if let (Some(lat), Some(lon)) = (element.lat, element.lon) {
        return Some(Coordinates::new(lat, lon));
    }
    element
        .center
        .map(|center| Coordinates::new(center.lat, center.lon))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;

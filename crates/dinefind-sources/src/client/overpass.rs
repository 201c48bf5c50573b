//! Overpass QL for the live proximity query.

use dinefind_core::Coordinates;

/// OSM `amenity` value requested for restaurant listings.
pub const RESTAURANT_AMENITY: &str = "restaurant";

/// Builds an Overpass QL query for `amenity` nodes within `radius_m` metres
/// of `center`, returning JSON with element centers.
#[must_use]
pub fn build_proximity_query(center: Coordinates, radius_m: u32, amenity: &str) -> String {
    format!(
        "[out:json];\nnode(around:{radius_m}, {lat}, {lon})[\"amenity\"=\"{amenity}\"];\nout center;\n",
        lat = center.latitude,
        lon = center.longitude,
    )
}

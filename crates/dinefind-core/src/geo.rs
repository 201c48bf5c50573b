//! Great-circle distance between a selected city and a listing.

use serde::{Deserialize, Serialize};

use crate::city::CityFilter;
use crate::listing::Listing;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Haversine distance in kilometres between two points.
#[must_use]
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Distance from the selected city to `listing`.
///
/// `None` when the filter is `All` or the listing has no coordinates.
#[must_use]
pub fn distance_from_city(filter: CityFilter, listing: &Listing) -> Option<f64> {
    let city = filter.city()?;
    let coords = listing.coordinates?;
    Some(haversine_km(city.coordinates(), coords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::City;

    fn listing_at(coordinates: Option<Coordinates>) -> Listing {
        Listing {
            id: "1".to_owned(),
            name: "Spice Route".to_owned(),
            image: None,
            rating: Some(4.2),
            prep_time_minutes: Some(20),
            location_label: "Mumbai".to_owned(),
            coordinates,
        }
    }

    #[test]
    fn zero_distance_for_identical_points() {
        let p = City::Delhi.coordinates();
        assert!(haversine_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = City::Mumbai.coordinates();
        let b = City::Pune.coordinates();
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn mumbai_to_pune_is_about_120_km() {
        let d = haversine_km(City::Mumbai.coordinates(), City::Pune.coordinates());
        assert!((118.0..122.0).contains(&d), "got {d}");
    }

    #[test]
    fn nearby_point_in_mumbai() {
        // 0.024 deg of latitude and 0.0223 deg of longitude at ~19 deg N.
        let d = haversine_km(
            City::Mumbai.coordinates(),
            Coordinates::new(19.10, 72.90),
        );
        assert!((d - 3.55).abs() < 0.02, "got {d}");
    }

    #[test]
    fn no_distance_when_filter_is_all() {
        let listing = listing_at(Some(Coordinates::new(19.10, 72.90)));
        assert!(distance_from_city(CityFilter::All, &listing).is_none());
    }

    #[test]
    fn no_distance_without_coordinates() {
        let listing = listing_at(None);
        assert!(distance_from_city(CityFilter::City(City::Mumbai), &listing).is_none());
    }

    #[test]
    fn distance_from_city_uses_city_table() {
        let target = Coordinates::new(19.10, 72.90);
        let listing = listing_at(Some(target));
        let d = distance_from_city(CityFilter::City(City::Mumbai), &listing).unwrap();
        assert!((d - haversine_km(City::Mumbai.coordinates(), target)).abs() < 1e-12);
    }
}

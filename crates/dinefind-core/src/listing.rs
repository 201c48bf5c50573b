//! The unit shown in the listing, plus the two image fallbacks.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// Inline graphic shown when a listing has no image or its image fails to load.
pub const PLACEHOLDER_IMAGE: &str = concat!(
    "data:image/svg+xml;utf8,",
    "%3Csvg%20xmlns%3D%22http%3A%2F%2Fwww.w3.org%2F2000%2Fsvg%22%20width%3D%22600%22%20height%3D%22400%22%3E",
    "%3Crect%20width%3D%22100%25%22%20height%3D%22100%25%22%20fill%3D%22%23f3f4f6%22%2F%3E",
    "%3Ctext%20x%3D%2250%25%22%20y%3D%2250%25%22%20dominant-baseline%3D%22middle%22%20",
    "text-anchor%3D%22middle%22%20fill%3D%22%239ca3af%22%20",
    "font-family%3D%22Arial%2C%20Helvetica%2C%20sans-serif%22%20font-size%3D%2220%22%3E",
    "Image%20not%20available%3C%2Ftext%3E%3C%2Fsvg%3E",
);

/// Deterministic stock-photo URL used when a source record carries no image.
#[must_use]
pub fn placeholder_search_url(key: impl std::fmt::Display) -> String {
    format!("https://loremflickr.com/600/400/restaurant,food?lock={key}")
}

/// One discoverable restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Source-provided identifier, stringified.
    pub id: String,
    /// Never empty after normalization.
    pub name: String,
    pub image: Option<String>,
    pub rating: Option<f64>,
    pub prep_time_minutes: Option<u32>,
    /// Assigned or selected city name.
    pub location_label: String,
    pub coordinates: Option<Coordinates>,
}

impl Listing {
    /// Image to display: the listing's own image, or [`PLACEHOLDER_IMAGE`].
    #[must_use]
    pub fn display_image(&self) -> &str {
        self.image
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Swaps in the placeholder after the image failed to load. Image failures
    /// never raise a notification.
    pub fn mark_image_failed(&mut self) {
        self.image = Some(PLACEHOLDER_IMAGE.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(image: Option<&str>) -> Listing {
        Listing {
            id: "7".to_owned(),
            name: "Masala Grill".to_owned(),
            image: image.map(str::to_owned),
            rating: None,
            prep_time_minutes: None,
            location_label: "Pune".to_owned(),
            coordinates: None,
        }
    }

    #[test]
    fn display_image_prefers_own_image() {
        let l = listing(Some("https://img.example/1.jpg"));
        assert_eq!(l.display_image(), "https://img.example/1.jpg");
    }

    #[test]
    fn display_image_falls_back_when_missing_or_blank() {
        assert_eq!(listing(None).display_image(), PLACEHOLDER_IMAGE);
        assert_eq!(listing(Some("  ")).display_image(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn mark_image_failed_substitutes_placeholder() {
        let mut l = listing(Some("https://broken.example/x.jpg"));
        l.mark_image_failed();
        assert_eq!(l.display_image(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn placeholder_search_url_is_keyed() {
        assert_eq!(
            placeholder_search_url(42),
            "https://loremflickr.com/600/400/restaurant,food?lock=42"
        );
    }

    #[test]
    fn placeholder_image_is_a_data_uri() {
        assert!(PLACEHOLDER_IMAGE.starts_with("data:image/svg+xml;utf8,"));
        assert!(PLACEHOLDER_IMAGE.contains("Image%20not%20available"));
    }
}

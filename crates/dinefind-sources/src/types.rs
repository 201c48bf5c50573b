//! Wire types for the two listing sources.
//!
//! ## Default catalog (`GET /recipes`)
//! Records carry a numeric `id` and usually `name`, `image`, `rating`, and
//! `cookTimeMinutes`. Everything except `id` is modelled as optional, and a
//! field of the wrong JSON type reads as absent, so one odd record never
//! fails the whole catalog.
//!
//! ## Live proximity query (Overpass `POST /api/interpreter`)
//! `node` elements report `lat`/`lon` directly; `way` and `relation`
//! elements only do so through `center` when the query ends in
//! `out center;`. Tags are free-form OSM key/value pairs; only `name` and
//! `image` are read. `image` is kept as a raw JSON value because only a
//! non-empty string is usable.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Top-level response from the default catalog endpoint.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub recipes: Vec<CatalogRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    pub id: i64,

    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<f64>,

    /// Fractional or negative values read as absent.
    #[serde(default, deserialize_with = "lenient")]
    pub cook_time_minutes: Option<u32>,
}

/// Reads any JSON value and keeps it only if it converts to `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Top-level response from the Overpass interpreter with `[out:json]`.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    pub elements: Vec<OverpassElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    /// OSM element id. Absent ids fall back to the element's position.
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub lat: Option<f64>,

    #[serde(default)]
    pub lon: Option<f64>,

    #[serde(default)]
    pub center: Option<OverpassCenter>,

    #[serde(default)]
    pub tags: Option<OverpassTags>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OverpassCenter {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassTags {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub image: Option<serde_json::Value>,
}

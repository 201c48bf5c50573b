//! The fixed city table that drives both the live proximity query and the
//! distance annotation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::geo::Coordinates;

/// One of the five cities the listing can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Chhindwara,
    Mumbai,
    Pune,
    Bangalore,
    Delhi,
}

impl City {
    /// Table order. Catalog listings are assigned cities round-robin in this order.
    pub const ALL: [City; 5] = [
        City::Chhindwara,
        City::Mumbai,
        City::Pune,
        City::Bangalore,
        City::Delhi,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            City::Chhindwara => "Chhindwara",
            City::Mumbai => "Mumbai",
            City::Pune => "Pune",
            City::Bangalore => "Bangalore",
            City::Delhi => "Delhi",
        }
    }

    #[must_use]
    pub fn coordinates(self) -> Coordinates {
        match self {
            City::Chhindwara => Coordinates::new(22.433_3, 78.616_7),
            City::Mumbai => Coordinates::new(19.076, 72.877_7),
            City::Pune => Coordinates::new(18.520_4, 73.856_7),
            City::Bangalore => Coordinates::new(12.971_6, 77.594_6),
            City::Delhi => Coordinates::new(28.704_1, 77.102_5),
        }
    }

    /// City assigned to the catalog record at `index`.
    #[must_use]
    pub fn round_robin(index: usize) -> City {
        Self::ALL[index % Self::ALL.len()]
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|city| city.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownCity(trimmed.to_owned()))
    }
}

/// Location filter selected by the user: the `All` sentinel or one city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CityFilter {
    #[default]
    All,
    City(City),
}

impl CityFilter {
    #[must_use]
    pub fn city(self) -> Option<City> {
        match self {
            CityFilter::All => None,
            CityFilter::City(city) => Some(city),
        }
    }

    /// Listing heading: `"Restaurants"` for `All`, `"{city} Restaurants"` otherwise.
    #[must_use]
    pub fn heading(self) -> String {
        match self {
            CityFilter::All => "Restaurants".to_owned(),
            CityFilter::City(city) => format!("{city} Restaurants"),
        }
    }
}

impl fmt::Display for CityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityFilter::All => f.write_str("All"),
            CityFilter::City(city) => city.fmt(f),
        }
    }
}

impl FromStr for CityFilter {
    type Err = CoreError;

    /// An empty string or `"All"` (any case) selects the default catalog.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(CityFilter::All);
        }
        trimmed.parse().map(CityFilter::City)
    }
}

impl From<City> for CityFilter {
    fn from(city: City) -> Self {
        CityFilter::City(city)
    }
}

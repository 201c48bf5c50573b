//! Chooses and runs the fetch strategy for a city filter.
//!
//! `All` reads the default catalog. A specific city runs a live proximity
//! query around that city and falls back to the default catalog when the
//! query fails. Every failure is reported through the [`Notifier`]; none is
//! returned to the caller.

use std::sync::{Mutex, PoisonError};

use dinefind_core::{AppConfig, City, CityFilter, Listing};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::client::{DiscoveryClient, RESTAURANT_AMENITY};
use crate::error::SourceError;
use crate::normalize::{normalize_catalog, normalize_elements};
use crate::notify::Notifier;

pub const CATALOG_FAILURE_MESSAGE: &str = "Failed loading default restaurants";
pub const LIVE_FAILURE_MESSAGE: &str = "Failed to load real restaurants";

/// Where a successful load came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Catalog,
    Live(City),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The listing set should be replaced wholesale.
    Replaced {
        source: SourceKind,
        listings: Vec<Listing>,
    },
    /// Every strategy failed; keep whatever is currently shown.
    Unchanged,
}

impl LoadOutcome {
    #[must_use]
    pub fn into_listings(self) -> Option<Vec<Listing>> {
        match self {
            LoadOutcome::Replaced { listings, .. } => Some(listings),
            LoadOutcome::Unchanged => None,
        }
    }
}

pub struct SourceSelector {
    client: DiscoveryClient,
    radius_m: u32,
    /// Source of synthesized ratings and prep times for live listings.
    rng: Mutex<StdRng>,
}

impl SourceSelector {
    /// `seed` pins the synthesized fields; `None` seeds from the OS.
    #[must_use]
    pub fn new(client: DiscoveryClient, radius_m: u32, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            client,
            radius_m,
            rng: Mutex::new(rng),
        }
    }

    /// # Errors
    ///
    /// Returns [`SourceError`] if the HTTP client cannot be built from `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, SourceError> {
        let client = DiscoveryClient::from_config(config)?;
        Ok(Self::new(client, config.search_radius_m, config.rng_seed))
    }

    /// Runs exactly one strategy for `filter`, plus the catalog fallback when
    /// a live query fails.
    pub async fn load<N>(&self, filter: CityFilter, notifier: &N) -> LoadOutcome
    where
        N: Notifier + ?Sized,
    {
        match filter {
            CityFilter::All => self.load_catalog(notifier).await,
            CityFilter::City(city) => self.load_live(city, notifier).await,
        }
    }

    async fn load_catalog<N>(&self, notifier: &N) -> LoadOutcome
    where
        N: Notifier + ?Sized,
    {
        match self.client.fetch_catalog().await {
            Ok(records) => {
                let listings = normalize_catalog(records);
                tracing::info!(count = listings.len(), "loaded default catalog");
                LoadOutcome::Replaced {
                    source: SourceKind::Catalog,
                    listings,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "default catalog fetch failed");
                notifier.error(CATALOG_FAILURE_MESSAGE);
                LoadOutcome::Unchanged
            }
        }
    }

    async fn load_live<N>(&self, city: City, notifier: &N) -> LoadOutcome
    where
        N: Notifier + ?Sized,
    {
        let fetched = self
            .client
            .fetch_nearby(city.coordinates(), self.radius_m, RESTAURANT_AMENITY)
            .await;

        match fetched {
            Ok(elements) => {
                let listings = {
                    let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
                    normalize_elements(elements, city, &mut *rng)
                };
                tracing::info!(%city, count = listings.len(), "loaded live restaurants");
                LoadOutcome::Replaced {
                    source: SourceKind::Live(city),
                    listings,
                }
            }
            Err(e) => {
                tracing::warn!(%city, error = %e, "live query failed, falling back to default catalog");
                notifier.error(LIVE_FAILURE_MESSAGE);
                self.load_catalog(notifier).await
            }
        }
    }
}

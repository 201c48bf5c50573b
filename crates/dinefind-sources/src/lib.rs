pub mod client;
pub mod error;
pub mod normalize;
pub mod notify;
mod retry;
pub mod selector;
pub mod types;

pub use client::{build_proximity_query, DiscoveryClient};
pub use error::SourceError;
pub use normalize::{normalize_catalog, normalize_elements};
pub use notify::Notifier;
pub use selector::{
    LoadOutcome, SourceKind, SourceSelector, CATALOG_FAILURE_MESSAGE, LIVE_FAILURE_MESSAGE,
};
pub use types::{CatalogRecord, CatalogResponse, OverpassElement, OverpassResponse};

pub mod app_config;
pub mod city;
pub mod config;
pub mod error;
pub mod geo;
pub mod listing;
pub mod paging;
pub mod state;

pub use app_config::{AppConfig, Environment};
pub use city::{City, CityFilter};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use geo::{distance_from_city, haversine_km, Coordinates, EARTH_RADIUS_KM};
pub use listing::{placeholder_search_url, Listing, PLACEHOLDER_IMAGE};
pub use paging::{
    filter_listings, page_count, page_items, page_slice, ListingRow, PageItem, PageView,
    DEFAULT_PAGE_SIZE,
};
pub use state::{DiscoveryState, RequestTicket};

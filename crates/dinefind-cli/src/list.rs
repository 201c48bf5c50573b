//! One-shot listing: fetch for a city, filter, and print one page.

use dinefind_core::{AppConfig, CityFilter, DiscoveryState};
use dinefind_sources::SourceSelector;

use crate::notify::ConsoleNotifier;
use crate::render;

/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the page cannot be
/// serialized. Fetch failures are reported through the notifier and render
/// as an empty listing.
pub(crate) async fn run_list(
    config: &AppConfig,
    city: CityFilter,
    query: &str,
    page: usize,
    json: bool,
) -> anyhow::Result<()> {
    let selector = SourceSelector::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build listing sources: {e}"))?;
    let mut state = DiscoveryState::new(config.page_size)?;

    let ticket = state.select_city(city);
    if let Some(listings) = selector.load(city, &ConsoleNotifier).await.into_listings() {
        state.apply(ticket, listings);
    }

    state.set_query(query);
    state.go_to_page(page);
    let view = state.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::render_page(&view));
    }
    Ok(())
}

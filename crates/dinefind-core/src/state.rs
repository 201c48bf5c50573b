//! Owned selection state for one listing session.
//!
//! All mutation goes through [`DiscoveryState`]. Fetches never touch it
//! directly: a city change hands out a [`RequestTicket`] and the fetch result
//! is applied with that ticket. Only the most recently issued ticket is
//! accepted, so a slow response for an earlier city can never overwrite the
//! listings of a later selection.

use crate::city::CityFilter;
use crate::error::CoreError;
use crate::listing::Listing;
use crate::paging::{filter_listings, page_count, PageView};

/// Tag identifying one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    city: CityFilter,
}

impl RequestTicket {
    #[must_use]
    pub fn seq(self) -> u64 {
        self.seq
    }

    /// City the fetch was issued for.
    #[must_use]
    pub fn city(self) -> CityFilter {
        self.city
    }
}

#[derive(Debug, Clone)]
pub struct DiscoveryState {
    listings: Vec<Listing>,
    query: String,
    city: CityFilter,
    /// 1-based.
    page: usize,
    page_size: usize,
    loaded: bool,
    latest_request: u64,
}

impl DiscoveryState {
    /// Empty state on page 1 with the `All` filter and no query.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPageSize`] if `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self, CoreError> {
        if page_size == 0 {
            return Err(CoreError::InvalidPageSize);
        }
        Ok(Self {
            listings: Vec::new(),
            query: String::new(),
            city: CityFilter::All,
            page: 1,
            page_size,
            loaded: false,
            latest_request: 0,
        })
    }

    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn city(&self) -> CityFilter {
        self.city
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `true` once any fetch result has been applied.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        page_count(filter_listings(&self.listings, &self.query).len(), self.page_size)
    }

    /// Replaces the free-text query and returns to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Switches the city filter, returns to page 1 immediately, and issues a
    /// ticket for the fetch that should follow.
    pub fn select_city(&mut self, city: CityFilter) -> RequestTicket {
        self.city = city;
        self.page = 1;
        self.latest_request += 1;
        RequestTicket {
            seq: self.latest_request,
            city,
        }
    }

    /// Whether `ticket` is the most recently issued one.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.seq == self.latest_request
    }

    /// Replaces the listing set with a fetch result.
    ///
    /// Returns `false` and leaves the state untouched when `ticket` has been
    /// superseded by a later city change.
    pub fn apply(&mut self, ticket: RequestTicket, listings: Vec<Listing>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                stale_seq = ticket.seq,
                latest_seq = self.latest_request,
                city = %ticket.city,
                "discarding superseded fetch result"
            );
            return false;
        }
        self.listings = listings;
        self.loaded = true;
        self.revalidate_page();
        true
    }

    /// Jumps to `page`, clamped to `[1, total_pages]`. Returns the new page.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.total_pages());
        self.page
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.page + 1)
    }

    pub fn prev_page(&mut self) -> usize {
        self.go_to_page(self.page.saturating_sub(1))
    }

    /// Substitutes the placeholder image for the listing with `id`.
    /// Returns `false` if no such listing is loaded.
    pub fn image_failed(&mut self, id: &str) -> bool {
        match self.listings.iter_mut().find(|l| l.id == id) {
            Some(listing) => {
                listing.mark_image_failed();
                true
            }
            None => false,
        }
    }

    /// Derives the visible page, clamping an out-of-range page to 1 first.
    pub fn view(&mut self) -> PageView {
        self.revalidate_page();
        PageView::build(
            &self.listings,
            &self.query,
            self.city,
            self.page,
            self.page_size,
            self.loaded,
        )
    }

    fn revalidate_page(&mut self) {
        if self.page > self.total_pages() {
            self.page = 1;
        }
    }
}

//! Client-side filtering and fixed-size pagination.
//!
//! Filtering always runs before pagination. The compact page-index list
//! shows every page when there are at most [`MAX_PAGE_BUTTONS`] pages;
//! otherwise it keeps the first and last page plus a one-page window around
//! the current page, with an ellipsis wherever the window is not contiguous
//! with an endpoint.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::city::CityFilter;
use crate::geo::distance_from_city;
use crate::listing::Listing;

pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Page counts at or below this list every page number.
const MAX_PAGE_BUTTONS: usize = 5;

/// Case-insensitive substring match on the listing name. An empty query
/// matches everything.
#[must_use]
pub fn filter_listings<'a>(listings: &'a [Listing], query: &str) -> Vec<&'a Listing> {
    if query.is_empty() {
        return listings.iter().collect();
    }
    let needle = query.to_lowercase();
    listings
        .iter()
        .filter(|listing| listing.name.to_lowercase().contains(&needle))
        .collect()
}

/// `max(1, ceil(total / page_size))`.
#[must_use]
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Items on the 1-based `page`. Page `0` and pages past the end yield an
/// empty slice.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// One entry in the page-index control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{n}"),
            PageItem::Ellipsis => f.write_str("..."),
        }
    }
}

impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(n) => serializer.serialize_u64(*n as u64),
            PageItem::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Builds the compact page-index list for `current` out of `total` pages.
#[must_use]
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    if total <= MAX_PAGE_BUTTONS {
        return (1..=total).map(PageItem::Page).collect();
    }

    let left = current.saturating_sub(1).max(2);
    let right = current.saturating_add(1).min(total - 1);

    let mut items = vec![PageItem::Page(1)];
    if left > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((left..=right).map(PageItem::Page));
    if right < total - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

/// A visible listing annotated with its distance from the selected city and
/// the image a front end should show for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRow {
    #[serde(flatten)]
    pub listing: Listing,
    pub distance_km: Option<f64>,
    /// [`Listing::display_image`], resolved.
    pub display_image: String,
}

/// Everything needed to render one page of the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub heading: String,
    pub city: CityFilter,
    pub query: String,
    pub page: usize,
    pub total_pages: usize,
    /// Size of the filtered set.
    pub total: usize,
    /// 1-based index of the first visible row, `0` when the page is empty.
    pub range_start: usize,
    pub range_end: usize,
    pub rows: Vec<ListingRow>,
    /// Empty when `no_results` is set.
    pub page_items: Vec<PageItem>,
    /// The listing set is non-empty but nothing matched the query.
    pub no_results: bool,
    pub has_prev: bool,
    pub has_next: bool,
    pub loaded: bool,
}

impl PageView {
    /// Derives the visible page. `page` must already be valid for the
    /// filtered set; out-of-range pages render with no rows.
    #[must_use]
    pub fn build(
        listings: &[Listing],
        query: &str,
        city: CityFilter,
        page: usize,
        page_size: usize,
        loaded: bool,
    ) -> Self {
        let filtered = filter_listings(listings, query);
        let total = filtered.len();
        let total_pages = page_count(total, page_size);

        let rows: Vec<ListingRow> = page_slice(&filtered, page, page_size)
            .iter()
            .map(|listing| ListingRow {
                distance_km: distance_from_city(city, listing),
                display_image: listing.display_image().to_owned(),
                listing: (*listing).clone(),
            })
            .collect();

        let (range_start, range_end) = if rows.is_empty() {
            (0, 0)
        } else {
            let offset = page.saturating_sub(1).saturating_mul(page_size);
            (offset.saturating_add(1), offset.saturating_add(rows.len()))
        };
        let no_results = !listings.is_empty() && total == 0;

        Self {
            heading: city.heading(),
            city,
            query: query.to_owned(),
            page,
            total_pages,
            total,
            range_start,
            range_end,
            rows,
            page_items: if no_results {
                Vec::new()
            } else {
                page_items(page, total_pages)
            },
            no_results,
            has_prev: page > 1,
            has_next: page < total_pages,
            loaded,
        }
    }
}

#[cfg(test)]
#[path = "paging_test.rs"]
mod tests;

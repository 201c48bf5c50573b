//! Plain-text rendering of a listing page.

use std::fmt::Write as _;

use dinefind_core::{City, ListingRow, PageItem, PageView, PLACEHOLDER_IMAGE};

const NO_RESULTS: &str = "No results found";

/// Caption printed in place of the inline placeholder graphic.
const IMAGE_UNAVAILABLE: &str = "[Image not available]";

#[must_use]
pub(crate) fn render_cities() -> String {
    let mut out = String::from("All        default catalog, no distances\n");
    for city in City::ALL {
        let c = city.coordinates();
        let _ = writeln!(out, "{:<10} {:.4}, {:.4}", city.name(), c.latitude, c.longitude);
    }
    out
}

#[must_use]
pub(crate) fn render_page(view: &PageView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.heading);
    if !view.query.is_empty() {
        let _ = writeln!(out, "matching \"{}\"", view.query);
    }
    out.push('\n');

    if view.no_results {
        let _ = writeln!(out, "{NO_RESULTS}");
        let _ = writeln!(out, "\n{}", render_summary(view));
        return out;
    }

    if view.rows.is_empty() && !view.loaded {
        out.push_str("No restaurants loaded yet\n");
    }

    for (offset, row) in view.rows.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", view.range_start + offset, render_row(row));
    }

    let _ = writeln!(out, "\n{}", render_summary(view));
    let _ = writeln!(out, "{}", render_controls(view));
    out
}

fn render_row(row: &ListingRow) -> String {
    let listing = &row.listing;
    let rating = listing
        .rating
        .map_or_else(|| "-".to_owned(), |r| format!("{r}\u{2605}"));
    let prep = listing
        .prep_time_minutes
        .map_or_else(|| "-".to_owned(), |m| format!("{m} mins"));

    let mut line = format!("{}  {rating}  {prep}", listing.name);
    if let Some(km) = row.distance_km {
        let _ = write!(line, "  {km:.1} km away");
    }
    let _ = write!(line, "\n     {}", listing.location_label);
    let image = if row.display_image == PLACEHOLDER_IMAGE {
        IMAGE_UNAVAILABLE
    } else {
        row.display_image.as_str()
    };
    let _ = write!(line, "\n     {image}");
    line
}

fn render_summary(view: &PageView) -> String {
    format!(
        "Showing {} - {} of {}",
        view.range_start, view.range_end, view.total
    )
}

/// `Prev 1 ... 5 [6] 7 ... 12 Next`, with unavailable arrows in parentheses.
fn render_controls(view: &PageView) -> String {
    let mut parts = Vec::with_capacity(view.page_items.len() + 2);
    parts.push(if view.has_prev { "Prev" } else { "(Prev)" }.to_owned());
    parts.extend(view.page_items.iter().map(|item| match item {
        PageItem::Page(n) if *n == view.page => format!("[{n}]"),
        other => other.to_string(),
    }));
    parts.push(if view.has_next { "Next" } else { "(Next)" }.to_owned());
    parts.join(" ")
}

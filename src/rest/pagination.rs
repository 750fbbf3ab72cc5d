//! # Pagination Policy
//!
//! Slices an ordered result set into fixed-size pages, keyed by a
//! 1-based `page` query parameter.
//!
//! ## Edge cases
//! - Out-of-range page numbers yield an empty page, not an error
//! - A malformed `page` parameter falls back to page 1

use std::collections::HashMap;

use serde::Serialize;

/// Fixed page size
pub const PAGE_SIZE: usize = 20;

/// Pagination envelope: total count, next/previous links, and the
/// current page's results
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Slice `items` down to the requested page
///
/// `base` is the request path including any filter query string; the
/// `page` parameter is appended to it when building the next/previous
/// links.
pub fn paginate<T>(items: Vec<T>, page: usize, base: &str) -> Page<T> {
    let count = items.len();
    let page = page.max(1);
    let start = (page - 1).saturating_mul(PAGE_SIZE);

    let results: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .collect();

    // Saturating arithmetic: a huge page number must yield an empty
    // page, never an overflow
    let next = if start.saturating_add(PAGE_SIZE) < count {
        Some(page_link(base, page.saturating_add(1)))
    } else {
        None
    };
    let previous = if page > 1 {
        Some(page_link(base, page - 1))
    } else {
        None
    };

    Page {
        count,
        next,
        previous,
        results,
    }
}

/// Parse the `page` query parameter (default 1, lenient)
pub fn parse_page(params: &HashMap<String, String>) -> usize {
    params
        .get("page")
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}

fn page_link(base: &str, page: usize) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}page={}", base, separator, page)
}

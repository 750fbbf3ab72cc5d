//! Search and Pagination Tests
//!
//! Properties of the search filters and pagination policy over the
//! room service:
//! - Page size is fixed at 20; pages are disjoint and cover the set
//! - Beyond-range pages are empty, not errors
//! - Filters combine with AND; omitted filters impose no constraint
//! - A malformed filter value falls back to the unfiltered set

use std::collections::HashMap;

use roomstay::auth::AuthContext;
use roomstay::rest::{pagination, MemoryRoomService, RoomService, SearchFilters, PAGE_SIZE};
use serde_json::json;
use uuid::Uuid;

// =============================================================================
// Helper Functions
// =============================================================================

fn seeded_service(prices: &[f64]) -> MemoryRoomService {
    let service = MemoryRoomService::new();
    let ctx = AuthContext::authenticated(Uuid::new_v4());

    for (i, price) in prices.iter().enumerate() {
        service
            .create(
                json!({
                    "name": format!("Room {}", i),
                    "price": price,
                    "beds": i % 4,
                    "bedrooms": i % 3,
                    "bathrooms": i % 2
                }),
                &ctx,
            )
            .unwrap();
    }

    service
}

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Pagination Tests
// =============================================================================

/// Requesting page N returns at most 20 items.
#[test]
fn test_page_size_cap() {
    let prices: Vec<f64> = (0..50).map(|i| i as f64).collect();
    let service = seeded_service(&prices);

    let rooms = service.list().unwrap();
    let page = pagination::paginate(rooms, 1, "/rooms");

    assert_eq!(page.results.len(), PAGE_SIZE);
    assert_eq!(page.count, 50);
}

/// Items across consecutive pages are disjoint and cover the full
/// ordered set.
#[test]
fn test_pages_disjoint_and_covering() {
    let prices: Vec<f64> = (0..50).map(|i| i as f64).collect();
    let service = seeded_service(&prices);

    let all: Vec<Uuid> = service.list().unwrap().iter().map(|r| r.id).collect();

    let mut paged = Vec::new();
    for p in 1..=3 {
        let rooms = service.list().unwrap();
        paged.extend(
            pagination::paginate(rooms, p, "/rooms")
                .results
                .iter()
                .map(|r| r.id),
        );
    }

    assert_eq!(paged, all);
}

/// A page beyond the range is an empty list, not an error.
#[test]
fn test_page_beyond_range_is_empty() {
    let service = seeded_service(&[10.0, 20.0]);

    let page = pagination::paginate(service.list().unwrap(), 7, "/rooms");

    assert!(page.results.is_empty());
    assert_eq!(page.count, 2);
}

/// Link chain walks forward and backward consistently.
#[test]
fn test_page_links() {
    let prices: Vec<f64> = (0..45).map(|i| i as f64).collect();
    let service = seeded_service(&prices);

    let first = pagination::paginate(service.list().unwrap(), 1, "/rooms");
    assert_eq!(first.next.as_deref(), Some("/rooms?page=2"));
    assert!(first.previous.is_none());

    let middle = pagination::paginate(service.list().unwrap(), 2, "/rooms");
    assert_eq!(middle.next.as_deref(), Some("/rooms?page=3"));
    assert_eq!(middle.previous.as_deref(), Some("/rooms?page=1"));

    let last = pagination::paginate(service.list().unwrap(), 3, "/rooms");
    assert!(last.next.is_none());
}

// =============================================================================
// Search Tests
// =============================================================================

/// min_price and max_price bound the result set inclusively.
#[test]
fn test_price_range_search() {
    let service = seeded_service(&[50.0, 100.0, 150.0, 200.0, 250.0]);

    let filters =
        SearchFilters::parse(&query(&[("min_price", "100"), ("max_price", "200")])).unwrap();

    let results = service.search(&filters).unwrap();
    let prices: Vec<f64> = results.iter().map(|r| r.price).collect();

    assert_eq!(prices, [100.0, 150.0, 200.0]);
}

/// Omitting a filter parameter imposes no constraint on that field.
#[test]
fn test_omitted_filters_do_not_constrain() {
    let service = seeded_service(&[50.0, 100.0, 150.0]);

    let filters = SearchFilters::parse(&query(&[("min_price", "100")])).unwrap();

    let results = service.search(&filters).unwrap();
    assert_eq!(results.len(), 2);
}

/// Filters combine with AND.
#[test]
fn test_filters_combine_with_and() {
    let service = MemoryRoomService::new();
    let ctx = AuthContext::authenticated(Uuid::new_v4());

    service
        .create(json!({"name": "cheap big", "price": 50, "beds": 3}), &ctx)
        .unwrap();
    service
        .create(json!({"name": "pricey big", "price": 300, "beds": 3}), &ctx)
        .unwrap();
    service
        .create(json!({"name": "cheap small", "price": 50, "beds": 1}), &ctx)
        .unwrap();

    let filters =
        SearchFilters::parse(&query(&[("max_price", "100"), ("beds", "2")])).unwrap();

    let results = service.search(&filters).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "cheap big");
}

/// A malformed filter value falls back to the unfiltered full set.
#[test]
fn test_malformed_filter_falls_back_to_full_set() {
    let service = seeded_service(&[50.0, 100.0, 150.0]);

    let params = query(&[("max_price", "abc")]);
    let filters = SearchFilters::parse(&params).unwrap_or_default();

    let results = service.search(&filters).unwrap();
    assert_eq!(results.len(), 3);
}

/// Search results paginate identically to the plain list, with filter
/// parameters preserved in the links.
#[test]
fn test_search_pagination_preserves_filters_in_links() {
    let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    let service = seeded_service(&prices);

    let filters = SearchFilters::parse(&query(&[("min_price", "100")])).unwrap();
    let results = service.search(&filters).unwrap();
    let base = filters.as_base_link("/rooms/search");

    let page = pagination::paginate(results, 1, &base);

    assert_eq!(page.results.len(), PAGE_SIZE);
    assert_eq!(
        page.next.as_deref(),
        Some("/rooms/search?min_price=100&page=2")
    );
}

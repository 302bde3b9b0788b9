//! Tests for the URL-backed list query types.

use crate::client::list::query::{DramaQuery, DramaSort, ListQuery};
use crate::model::drama::DramaStatus;

/// Tests that a search submission resets pagination.
///
/// Verifies the page returns to 1 no matter how deep the user had paged.
///
/// Expected: page 1, search applied.
#[test]
fn search_resets_page_to_one() {
    let query = ListQuery::from_route(7, "old").with_search("new");

    assert_eq!(query.page, 1);
    assert_eq!(query.search, "new");
}

/// Tests that every drama filter change resets pagination.
///
/// Expected: page 1 after status, genre, and sort changes.
#[test]
fn drama_filter_changes_reset_page() {
    let query = DramaQuery::from_route(5, "", "", "", "");

    assert_eq!(query.with_status(Some(DramaStatus::Ongoing)).page, 1);
    assert_eq!(query.with_genre(Some("romance".into())).page, 1);
    assert_eq!(query.with_sort(DramaSort::Rating).page, 1);
    assert_eq!(query.with_search("term").page, 1);
}

/// Tests that paging alone preserves the rest of the query.
///
/// Expected: page updated, search and filters untouched.
#[test]
fn with_page_keeps_filters() {
    let query = DramaQuery::from_route(1, "lee", "ongoing", "romance", "rating");
    let paged = query.with_page(3);

    assert_eq!(paged.page, 3);
    assert_eq!(paged.search, "lee");
    assert_eq!(paged.status, Some(DramaStatus::Ongoing));
    assert_eq!(paged.genre.as_deref(), Some("romance"));
    assert_eq!(paged.sort, DramaSort::Rating);
}

/// Tests normalization of raw route parameters.
///
/// A fresh navigation has no query string, so every parameter arrives as
/// its type default; the query must still be well-formed.
///
/// Expected: page clamps to 1, filters unset, default sort.
#[test]
fn normalizes_missing_route_parameters() {
    let query = DramaQuery::from_route(0, "  ", "", "", "");

    assert_eq!(query.page, 1);
    assert_eq!(query.search, "");
    assert_eq!(query.status, None);
    assert_eq!(query.genre, None);
    assert_eq!(query.sort, DramaSort::Newest);
}

/// Tests that unknown filter values degrade to defaults instead of failing.
///
/// Expected: bad status ignored, bad sort falls back to newest.
#[test]
fn ignores_unknown_filter_values() {
    let query = DramaQuery::from_route(2, "", "cancelled", "", "alphabetical");

    assert_eq!(query.status, None);
    assert_eq!(query.sort, DramaSort::Newest);
}

/// Tests that query state survives a round trip through its route
/// parameter representation.
///
/// Expected: rebuilt query equals the original.
#[test]
fn round_trips_route_parameters() {
    let query = DramaQuery::from_route(4, "kim", "completed", "thriller", "views");
    let rebuilt = DramaQuery::from_route(
        query.page,
        &query.search,
        &query.status_param(),
        &query.genre_param(),
        &query.sort_param(),
    );

    assert_eq!(rebuilt, query);
}

//! Tests for envelope decoding and list page arithmetic.

use serde_json::json;

use crate::model::api::{Envelope, ListPayload, PageData, PAGE_SIZE};

#[derive(Debug, PartialEq, serde::Deserialize)]
struct Row {
    id: i64,
}

fn decode(value: serde_json::Value) -> PageData<Row> {
    let payload: ListPayload<Row> = serde_json::from_value(value).expect("payload should decode");
    payload.into()
}

/// Tests decoding a bare-array list response.
///
/// Verifies that an array of two rows produces two items with the array
/// length standing in for the total, and that a single page results.
///
/// Expected: 2 items, total 2, total_pages 1.
#[test]
fn decodes_bare_array_shape() {
    let page = decode(json!([{ "id": 1 }, { "id": 2 }]));

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 2);
    assert!(!page.server_paged);
    assert_eq!(page.total_pages(), 1);
}

/// Tests decoding the paged `{items, total}` list response.
///
/// Verifies that page 1 of 34 rows yields 4 pages with "next" available,
/// while page 4 is the last page.
///
/// Expected: total_pages 4; has_next true on page 1, false on page 4.
#[test]
fn decodes_paged_envelope_shape() {
    let rows: Vec<_> = (1..=10).map(|id| json!({ "id": id })).collect();
    let page = decode(json!({ "items": rows, "total": 34 }));

    assert!(page.server_paged);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total, 34);
    assert_eq!(page.total_pages(), 4);
    assert!(page.has_next(1));
    assert!(!page.has_next(4));
}

/// Tests the total_pages ceiling arithmetic across totals.
///
/// Expected: ceil(total / PAGE_SIZE) for every sampled total.
#[test]
fn computes_total_pages_as_ceiling() {
    for (total, expected) in [(0, 0), (1, 1), (9, 1), (10, 1), (11, 2), (100, 10), (101, 11)] {
        let page = PageData::<Row> {
            items: Vec::new(),
            total,
            server_paged: true,
        };
        assert_eq!(page.total_pages(), expected, "total = {total}");
    }
}

/// Tests that "next" is unavailable whenever the list is empty.
///
/// Expected: has_next false on every page when total is 0.
#[test]
fn disables_next_on_empty_results() {
    let page = PageData::<Row>::default();

    assert!(!page.has_next(1));
    assert!(!page.has_next(5));
}

/// Tests that "previous" only depends on the current page number.
///
/// Expected: disabled on page 1, enabled from page 2 on.
#[test]
fn disables_prev_on_first_page() {
    let page = PageData::<Row> {
        items: Vec::new(),
        total: 30,
        server_paged: true,
    };

    assert!(!page.has_prev(1));
    assert!(page.has_prev(2));
}

/// Tests the bare-array "next" heuristic when the server reports no total.
///
/// A full page may be followed by more rows; a short page cannot be.
///
/// Expected: has_next true for PAGE_SIZE rows, false for fewer.
#[test]
fn applies_full_page_heuristic_for_bare_arrays() {
    let full: Vec<_> = (0..PAGE_SIZE).map(|id| json!({ "id": id })).collect();
    let page = decode(json!(full));
    assert!(page.has_next(1));

    let short = decode(json!([{ "id": 1 }]));
    assert!(!short.has_next(1));
}

/// Tests decoding a business-failure envelope.
///
/// The server reports failures with HTTP 200 and `success:false`; the
/// message must survive decoding so callers can surface it.
///
/// Expected: success false, message preserved, data absent.
#[test]
fn decodes_failure_envelope() {
    let envelope: Envelope<Row> = serde_json::from_value(json!({
        "success": false,
        "message": "title already exists",
        "data": null,
    }))
    .expect("envelope should decode");

    assert!(!envelope.success);
    assert_eq!(envelope.message, "title already exists");
    assert!(envelope.data.is_none());
}

/// Tests decoding a success envelope with a missing message field.
///
/// Expected: message defaults to empty, data present.
#[test]
fn defaults_missing_message() {
    let envelope: Envelope<Row> = serde_json::from_value(json!({
        "success": true,
        "data": { "id": 7 },
    }))
    .expect("envelope should decode");

    assert!(envelope.success);
    assert_eq!(envelope.message, "");
    assert_eq!(envelope.data, Some(Row { id: 7 }));
}

//! Tests for the fetch lifecycle state machine and its generation guard.

use crate::client::list::state::{ListPhase, ListState};
use crate::model::api::PageData;

fn page_of(items: Vec<i32>) -> PageData<i32> {
    PageData {
        total: items.len() as u64,
        items,
        server_paged: true,
    }
}

/// Tests the happy-path phase transitions.
///
/// Expected: idle -> loading -> populated, rows replaced.
#[test]
fn resolves_latest_generation() {
    let mut state = ListState::default();
    assert_eq!(state.phase(), ListPhase::Idle);

    let generation = state.begin();
    assert!(state.is_loading());

    assert!(state.resolve(generation, page_of(vec![1, 2])));
    assert_eq!(state.phase(), ListPhase::Populated);
    assert_eq!(state.rows(), &[1, 2]);
}

/// Tests that an empty result is its own phase, not an error.
///
/// Expected: empty phase, no rows.
#[test]
fn empty_result_enters_empty_phase() {
    let mut state = ListState::default();
    let generation = state.begin();

    assert!(state.resolve(generation, page_of(vec![])));
    assert_eq!(state.phase(), ListPhase::Empty);
}

/// Tests that a stale success is discarded entirely.
///
/// Two fetches are issued back to back; the first one's response arrives
/// after the second has been issued and must not replace anything, nor
/// clear the loading flag owned by the newer fetch.
///
/// Expected: resolve returns false, state still loading, rows untouched.
#[test]
fn discards_stale_success() {
    let mut state = ListState::default();
    let first = state.begin();
    let _second = state.begin();

    assert!(!state.resolve(first, page_of(vec![9])));
    assert!(state.is_loading());
    assert!(state.rows().is_empty());
}

/// Tests that a stale failure is discarded as well.
///
/// Expected: reject returns false, loading still owned by the newer fetch.
#[test]
fn discards_stale_failure() {
    let mut state = ListState::<i32>::default();
    let first = state.begin();
    let _second = state.begin();

    assert!(!state.reject(first));
    assert!(state.is_loading());
}

/// Tests the out-of-order interleaving the generation token exists for.
///
/// Fetch A is issued, then fetch B; B's response lands first, then A's
/// arrives late. The screen must keep B's rows.
///
/// Expected: B's data wins, A's is dropped, loading cleared exactly once.
#[test]
fn later_request_wins_over_late_response() {
    let mut state = ListState::default();
    let a = state.begin();
    let b = state.begin();

    assert!(state.resolve(b, page_of(vec![20, 21])));
    assert!(!state.resolve(a, page_of(vec![10])));

    assert_eq!(state.rows(), &[20, 21]);
    assert_eq!(state.phase(), ListPhase::Populated);
}

/// Tests that a failure keeps the previously displayed rows.
///
/// Expected: errored phase, old rows still available, loading cleared.
#[test]
fn failure_retains_previous_rows() {
    let mut state = ListState::default();
    let generation = state.begin();
    assert!(state.resolve(generation, page_of(vec![1, 2, 3])));

    let retry = state.begin();
    assert!(state.reject(retry));

    assert_eq!(state.phase(), ListPhase::Errored);
    assert!(!state.is_loading());
    assert_eq!(state.rows(), &[1, 2, 3]);
}

/// Tests that a fetch after a failure recovers normally.
///
/// Expected: populated phase with the fresh rows.
#[test]
fn recovers_after_failure() {
    let mut state = ListState::default();
    let generation = state.begin();
    assert!(state.reject(generation));

    let retry = state.begin();
    assert!(state.resolve(retry, page_of(vec![5])));
    assert_eq!(state.phase(), ListPhase::Populated);
    assert_eq!(state.rows(), &[5]);
}

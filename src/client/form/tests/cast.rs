//! Tests for the drama form's cast list operations.

use crate::client::form::DramaForm;
use crate::model::actor::ActorDto;
use crate::model::drama::CastRole;

fn actor(id: i64, name: &str) -> ActorDto {
    ActorDto {
        id,
        name: name.to_string(),
        photo_url: None,
    }
}

/// Tests adding a new actor to the cast.
///
/// Expected: entry appended with the role chosen at add time.
#[test]
fn adds_actor_with_role() {
    let mut form = DramaForm::default();

    form.add_cast(actor(1, "Kim Ji-won"), CastRole::Main)
        .expect("first add should succeed");

    assert_eq!(form.cast.len(), 1);
    assert_eq!(form.cast[0].role, CastRole::Main);
}

/// Tests that adding an actor already in the cast is rejected.
///
/// Verifies the rejection is explicit (so the UI can toast it) and the
/// list is left untouched, even when a different role was requested.
///
/// Expected: Err, length unchanged, original role kept.
#[test]
fn rejects_duplicate_actor() {
    let mut form = DramaForm::default();
    form.add_cast(actor(1, "Kim Ji-won"), CastRole::Main).unwrap();

    let result = form.add_cast(actor(1, "Kim Ji-won"), CastRole::Support);

    assert!(result.is_err());
    assert_eq!(form.cast.len(), 1);
    assert_eq!(form.cast[0].role, CastRole::Main);
}

/// Tests removing a cast member client-side.
///
/// Expected: only the matching actor is removed.
#[test]
fn removes_by_actor_id() {
    let mut form = DramaForm::default();
    form.add_cast(actor(1, "Kim Ji-won"), CastRole::Main).unwrap();
    form.add_cast(actor(2, "Lee Min-ho"), CastRole::Support).unwrap();

    form.remove_cast(1);

    assert_eq!(form.cast.len(), 1);
    assert_eq!(form.cast[0].actor.id, 2);
}

/// Tests that the submitted payload carries the full cast as id/role
/// pairs.
///
/// Expected: one entry per cast member, in order.
#[test]
fn payload_carries_full_cast() {
    let mut form = DramaForm::default();
    form.add_cast(actor(1, "Kim Ji-won"), CastRole::Main).unwrap();
    form.add_cast(actor(2, "Lee Min-ho"), CastRole::Support).unwrap();

    let payload = form.to_payload();

    assert_eq!(payload.cast.len(), 2);
    assert_eq!(payload.cast[0].actor_id, 1);
    assert_eq!(payload.cast[0].role, CastRole::Main);
    assert_eq!(payload.cast[1].actor_id, 2);
    assert_eq!(payload.cast[1].role, CastRole::Support);
}

/// Tests the genre multi-select toggle.
///
/// Expected: first toggle selects, second deselects.
#[test]
fn toggles_genre_selection() {
    let mut form = DramaForm::default();

    form.toggle_genre(3);
    assert!(form.has_genre(3));

    form.toggle_genre(3);
    assert!(!form.has_genre(3));
}

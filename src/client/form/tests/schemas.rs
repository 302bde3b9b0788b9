//! Tests for the per-field validation schemas and payload mappings.

use crate::client::form::{check, DramaForm, EpisodeForm, GenreForm, LoginForm, SeasonForm};
use crate::model::episode::EpisodeDto;

fn valid_drama() -> DramaForm {
    DramaForm {
        title: "Crash Landing on You".into(),
        synopsis: "A paragliding mishap drops a South Korean heiress in the North.".into(),
        poster_url: "https://img.marquee.tv/posters/cloy.jpg".into(),
        year: 2019,
        rating: 8.7,
        total_seasons: 1,
        ..DramaForm::default()
    }
}

/// Tests that a fully populated drama form passes its schema.
///
/// Expected: no errors.
#[test]
fn accepts_valid_drama() {
    assert!(check(&valid_drama()).is_ok());
}

/// Tests the required-title rule.
///
/// Expected: an error keyed on the title field, carrying its message.
#[test]
fn requires_drama_title() {
    let form = DramaForm {
        title: String::new(),
        ..valid_drama()
    };

    let errors = check(&form).unwrap_err();
    assert_eq!(errors.get("title").as_deref(), Some("Title is required"));
}

/// Tests the year and rating range rules.
///
/// Expected: errors on both fields, title untouched.
#[test]
fn bounds_drama_year_and_rating() {
    let form = DramaForm {
        year: 1800,
        rating: 11.0,
        ..valid_drama()
    };

    let errors = check(&form).unwrap_err();
    assert!(errors.get("year").is_some());
    assert!(errors.get("rating").is_some());
    assert!(errors.get("title").is_none());
}

/// Tests that a malformed login email never reaches the network.
///
/// Expected: error on the email field.
#[test]
fn rejects_malformed_login_email() {
    let form = LoginForm {
        email: "not-an-email".into(),
        password: "correct horse".into(),
    };

    assert!(check(&form).unwrap_err().get("email").is_some());
}

/// Tests the genre slug format rule.
///
/// Expected: uppercase and spaced slugs rejected, kebab-case accepted.
#[test]
fn enforces_slug_format() {
    let bad = GenreForm {
        name: "Slice of Life".into(),
        slug: "Slice of Life".into(),
    };
    assert!(check(&bad).unwrap_err().get("slug").is_some());

    let good = GenreForm {
        name: "Slice of Life".into(),
        slug: "slice-of-life".into(),
    };
    assert!(check(&good).is_ok());
}

/// Tests that blank optional URLs pass while malformed ones fail.
///
/// Expected: empty poster accepted, garbage poster rejected.
#[test]
fn optional_poster_url_rules() {
    let mut form = SeasonForm::new(1, 1);
    form.title = "Season 1".into();
    assert!(check(&form).is_ok());

    form.poster_url = "not a url".into();
    assert!(check(&form).unwrap_err().get("poster_url").is_some());
}

/// Tests the release date format rule and its payload mapping.
///
/// Expected: bad date rejected; good date parsed into the payload.
#[test]
fn parses_release_date() {
    let mut form = SeasonForm::new(1, 2);
    form.title = "Season 2".into();

    form.release_date = "March 3rd".into();
    assert!(check(&form).unwrap_err().get("release_date").is_some());

    form.release_date = "2024-03-03".into();
    assert!(check(&form).is_ok());
    let payload = form.to_payload();
    assert_eq!(
        payload.release_date.map(|d| d.format("%Y-%m-%d").to_string()),
        Some("2024-03-03".to_string())
    );
}

/// Tests the minutes-to-seconds round trip through the episode form.
///
/// An episode entered as 90 minutes must be transmitted as 5400 seconds
/// and re-open in the edit dialog showing 90 again.
///
/// Expected: payload duration 5400; re-loaded form shows 90.
#[test]
fn episode_duration_round_trips() {
    let mut form = EpisodeForm::new(7, 1);
    form.title = "Pilot".into();
    form.video_url = "https://cdn.marquee.tv/ep/1.m3u8".into();
    form.duration_minutes = 90;

    let payload = form.to_payload();
    assert_eq!(payload.duration, 5400);

    let dto = EpisodeDto {
        id: 1,
        season_id: 7,
        episode_number: 1,
        title: payload.title.clone(),
        video_url: payload.video_url.clone(),
        duration: payload.duration,
        thumbnail_url: payload.thumbnail_url.clone(),
        view_count: 0,
    };
    assert_eq!(EpisodeForm::from_dto(&dto).duration_minutes, 90);
}

/// Tests that a zero-minute episode fails validation.
///
/// Expected: error on duration_minutes.
#[test]
fn rejects_zero_duration() {
    let mut form = EpisodeForm::new(7, 1);
    form.title = "Pilot".into();
    form.video_url = "https://cdn.marquee.tv/ep/1.m3u8".into();
    form.duration_minutes = 0;

    assert!(check(&form).unwrap_err().get("duration_minutes").is_some());
}

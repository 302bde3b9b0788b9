use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeDto {
    pub id: i64,
    pub season_id: i64,
    pub episode_number: i32,
    pub title: String,
    pub video_url: String,
    /// Stored and transmitted in seconds; edited in minutes.
    pub duration: u32,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub view_count: u64,
}

/// Body for `POST /episodes` and `PUT /episodes/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EpisodePayload {
    pub season_id: i64,
    pub episode_number: i32,
    pub title: String,
    pub video_url: String,
    pub duration: u32,
    pub thumbnail_url: Option<String>,
}

/// Converts a duration entered in minutes to the seconds the API stores.
pub fn minutes_to_seconds(minutes: u32) -> u32 {
    minutes * 60
}

/// Converts stored seconds back to minutes for display, rounding to the
/// nearest whole minute. Exact for whole-minute values, so an edit that
/// only touches other fields round-trips without drift.
pub fn seconds_to_minutes(seconds: u32) -> u32 {
    (seconds + 30) / 60
}

#[cfg(test)]
mod tests {
    use super::{minutes_to_seconds, seconds_to_minutes};

    /// Tests the minute to second conversion used on form submit.
    ///
    /// Expected: 90 minutes stores as 5400 seconds.
    #[test]
    fn stores_whole_minutes_as_seconds() {
        assert_eq!(minutes_to_seconds(90), 5400);
    }

    /// Tests that whole-minute durations survive a store/display round trip.
    ///
    /// Expected: 90 -> 5400 -> 90.
    #[test]
    fn round_trips_whole_minutes() {
        assert_eq!(seconds_to_minutes(minutes_to_seconds(90)), 90);
    }

    /// Tests display rounding for durations that are not whole minutes.
    ///
    /// Expected: 89:29 rounds down to 89, 89:30 rounds up to 90.
    #[test]
    fn rounds_partial_minutes_to_nearest() {
        assert_eq!(seconds_to_minutes(5369), 89);
        assert_eq!(seconds_to_minutes(5370), 90);
    }

    /// Tests the zero duration edge case.
    ///
    /// Expected: 0 in both directions.
    #[test]
    fn handles_zero_duration() {
        assert_eq!(minutes_to_seconds(0), 0);
        assert_eq!(seconds_to_minutes(0), 0);
    }
}

use validator::Validate;

use super::{blank_to_none, optional_url};
use crate::model::episode::{minutes_to_seconds, seconds_to_minutes, EpisodeDto, EpisodePayload};

/// Duration is edited in minutes; the API stores seconds. The conversion
/// happens at the payload boundary in both directions.
#[derive(Debug, Clone, Validate)]
pub struct EpisodeForm {
    pub season_id: i64,
    #[validate(range(min = 1, message = "Episode number starts at 1"))]
    pub episode_number: i32,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(url(message = "Video must be a valid URL"))]
    pub video_url: String,
    #[validate(range(min = 1, max = 600, message = "Duration must be between 1 and 600 minutes"))]
    pub duration_minutes: u32,
    #[validate(custom(function = optional_url, message = "Thumbnail must be a valid URL"))]
    pub thumbnail_url: String,
}

impl EpisodeForm {
    /// Fresh form for a new episode, numbered after the existing ones.
    pub fn new(season_id: i64, next_number: i32) -> Self {
        Self {
            season_id,
            episode_number: next_number,
            title: String::new(),
            video_url: String::new(),
            duration_minutes: 60,
            thumbnail_url: String::new(),
        }
    }

    pub fn from_dto(episode: &EpisodeDto) -> Self {
        Self {
            season_id: episode.season_id,
            episode_number: episode.episode_number,
            title: episode.title.clone(),
            video_url: episode.video_url.clone(),
            duration_minutes: seconds_to_minutes(episode.duration),
            thumbnail_url: episode.thumbnail_url.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> EpisodePayload {
        EpisodePayload {
            season_id: self.season_id,
            episode_number: self.episode_number,
            title: self.title.trim().to_string(),
            video_url: self.video_url.trim().to_string(),
            duration: minutes_to_seconds(self.duration_minutes),
            thumbnail_url: blank_to_none(&self.thumbnail_url),
        }
    }
}

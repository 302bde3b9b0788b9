use validator::Validate;

use super::{blank_to_none, optional_date, optional_url, parse_date};
use crate::model::season::{SeasonDto, SeasonPayload};

#[derive(Debug, Clone, Validate)]
pub struct SeasonForm {
    pub drama_id: i64,
    #[validate(range(min = 1, message = "Season number starts at 1"))]
    pub season_number: i32,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub synopsis: String,
    #[validate(custom(function = optional_url, message = "Poster must be a valid URL"))]
    pub poster_url: String,
    #[validate(custom(function = optional_date, message = "Use the YYYY-MM-DD format"))]
    pub release_date: String,
}

impl SeasonForm {
    /// Fresh form for a new season, numbered after the existing ones.
    pub fn new(drama_id: i64, next_number: i32) -> Self {
        Self {
            drama_id,
            season_number: next_number,
            title: String::new(),
            synopsis: String::new(),
            poster_url: String::new(),
            release_date: String::new(),
        }
    }

    pub fn from_dto(season: &SeasonDto) -> Self {
        Self {
            drama_id: season.drama_id,
            season_number: season.season_number,
            title: season.title.clone(),
            synopsis: season.synopsis.clone().unwrap_or_default(),
            poster_url: season.poster_url.clone().unwrap_or_default(),
            release_date: season
                .release_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> SeasonPayload {
        SeasonPayload {
            drama_id: self.drama_id,
            season_number: self.season_number,
            title: self.title.trim().to_string(),
            synopsis: blank_to_none(&self.synopsis),
            poster_url: blank_to_none(&self.poster_url),
            release_date: parse_date(&self.release_date),
        }
    }
}

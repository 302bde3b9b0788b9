use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonDto {
    pub id: i64,
    pub drama_id: i64,
    pub season_number: i32,
    pub title: String,
    pub synopsis: Option<String>,
    pub poster_url: Option<String>,
    pub release_date: Option<NaiveDate>,
}

/// Body for `POST /seasons` and `PUT /seasons/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonPayload {
    pub drama_id: i64,
    pub season_number: i32,
    pub title: String,
    pub synopsis: Option<String>,
    pub poster_url: Option<String>,
    pub release_date: Option<NaiveDate>,
}

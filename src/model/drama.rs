use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{actor::ActorDto, genre::GenreDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DramaStatus {
    Ongoing,
    Completed,
}

impl DramaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DramaStatus::Ongoing => "ongoing",
            DramaStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ongoing" => Some(DramaStatus::Ongoing),
            "completed" => Some(DramaStatus::Completed),
            _ => None,
        }
    }
}

/// Role an actor plays in a drama's cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CastRole {
    Main,
    Support,
}

impl CastRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CastRole::Main => "main",
            CastRole::Support => "support",
        }
    }
}

/// One actor↔drama association with its role tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMemberDto {
    pub actor: ActorDto,
    pub role: CastRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DramaDto {
    pub id: i64,
    pub title: String,
    pub synopsis: String,
    pub poster_url: String,
    pub year: i32,
    pub rating: f32,
    pub total_seasons: i32,
    pub status: DramaStatus,
    #[serde(default)]
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub genres: Vec<GenreDto>,
    #[serde(default)]
    pub cast: Vec<CastMemberDto>,
}

/// One cast entry as sent to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CastEntryPayload {
    pub actor_id: i64,
    pub role: CastRole,
}

/// Body for `POST /dramas` and `PUT /dramas/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DramaPayload {
    pub title: String,
    pub synopsis: String,
    pub poster_url: String,
    pub year: i32,
    pub rating: f32,
    pub total_seasons: i32,
    pub status: DramaStatus,
    pub genre_ids: Vec<i64>,
    pub cast: Vec<CastEntryPayload>,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Body for `POST /genres` and `PUT /genres/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenrePayload {
    pub name: String,
    pub slug: String,
}

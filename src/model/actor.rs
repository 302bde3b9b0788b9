use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorDto {
    pub id: i64,
    pub name: String,
    pub photo_url: Option<String>,
}

/// Body for `POST /actors` and `PUT /actors/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorPayload {
    pub name: String,
    pub photo_url: Option<String>,
}

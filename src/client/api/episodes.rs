//! Episode endpoints. Episodes come back as the full set for a season.

use super::{ApiClient, ApiError};
use crate::model::api::{ListPayload, PageData};
use crate::model::episode::{EpisodeDto, EpisodePayload};

pub async fn list(api: &ApiClient, season_id: i64) -> Result<Vec<EpisodeDto>, ApiError> {
    let payload: ListPayload<EpisodeDto> =
        api.get(&format!("/seasons/{season_id}/episodes"), &[]).await?;
    let mut episodes = PageData::from(payload).items;
    episodes.sort_by_key(|episode| episode.episode_number);
    Ok(episodes)
}

pub async fn create(api: &ApiClient, payload: &EpisodePayload) -> Result<EpisodeDto, ApiError> {
    api.post("/episodes", payload).await
}

pub async fn update(
    api: &ApiClient,
    id: i64,
    payload: &EpisodePayload,
) -> Result<EpisodeDto, ApiError> {
    api.put(&format!("/episodes/{id}"), payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/episodes/{id}")).await
}

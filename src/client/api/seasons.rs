//! Season endpoints. Seasons come back as the full set for a drama; the
//! endpoint does not page.

use super::{ApiClient, ApiError};
use crate::model::api::{ListPayload, PageData};
use crate::model::season::{SeasonDto, SeasonPayload};

pub async fn list(api: &ApiClient, drama_id: i64) -> Result<Vec<SeasonDto>, ApiError> {
    let payload: ListPayload<SeasonDto> =
        api.get(&format!("/dramas/{drama_id}/seasons"), &[]).await?;
    let mut seasons = PageData::from(payload).items;
    seasons.sort_by_key(|season| season.season_number);
    Ok(seasons)
}

pub async fn create(api: &ApiClient, payload: &SeasonPayload) -> Result<SeasonDto, ApiError> {
    api.post("/seasons", payload).await
}

pub async fn update(
    api: &ApiClient,
    id: i64,
    payload: &SeasonPayload,
) -> Result<SeasonDto, ApiError> {
    api.put(&format!("/seasons/{id}"), payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/seasons/{id}")).await
}

//! Genre endpoints.

use super::{ApiClient, ApiError};
use crate::client::list::ListQuery;
use crate::model::api::{ListPayload, PageData, PAGE_SIZE};
use crate::model::genre::{GenreDto, GenrePayload};

pub async fn list(api: &ApiClient, query: &ListQuery) -> Result<PageData<GenreDto>, ApiError> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("limit", PAGE_SIZE.to_string()),
    ];
    if !query.search.is_empty() {
        params.push(("search", query.search.clone()));
    }

    let payload: ListPayload<GenreDto> = api.get("/genres", &params).await?;
    Ok(payload.into())
}

/// Every genre, for the drama form's multi-select. The endpoint pages, so
/// ask for one oversized page; a catalog will not outgrow it.
pub async fn options(api: &ApiClient) -> Result<Vec<GenreDto>, ApiError> {
    let params = vec![("page", "1".to_string()), ("limit", "100".to_string())];
    let payload: ListPayload<GenreDto> = api.get("/genres", &params).await?;
    Ok(PageData::from(payload).items)
}

pub async fn create(api: &ApiClient, payload: &GenrePayload) -> Result<GenreDto, ApiError> {
    api.post("/genres", payload).await
}

pub async fn update(api: &ApiClient, id: i64, payload: &GenrePayload) -> Result<GenreDto, ApiError> {
    api.put(&format!("/genres/{id}"), payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/genres/{id}")).await
}

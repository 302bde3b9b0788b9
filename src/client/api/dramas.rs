//! Drama catalog endpoints.

use super::{ApiClient, ApiError};
use crate::client::list::DramaQuery;
use crate::model::api::{ListPayload, PageData, PAGE_SIZE};
use crate::model::drama::{DramaDto, DramaPayload};

pub async fn list(api: &ApiClient, query: &DramaQuery) -> Result<PageData<DramaDto>, ApiError> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("limit", PAGE_SIZE.to_string()),
    ];
    if !query.search.is_empty() {
        // the dramas endpoint names its search parameter `q`
        params.push(("q", query.search.clone()));
    }
    if let Some(status) = query.status {
        params.push(("status", status.as_str().to_string()));
    }
    if let Some(genre) = &query.genre {
        params.push(("genre", genre.clone()));
    }
    params.push(("sort", query.sort.as_str().to_string()));

    let payload: ListPayload<DramaDto> = api.get("/dramas", &params).await?;
    Ok(payload.into())
}

pub async fn get(api: &ApiClient, id: i64) -> Result<DramaDto, ApiError> {
    api.get(&format!("/dramas/{id}"), &[]).await
}

pub async fn create(api: &ApiClient, payload: &DramaPayload) -> Result<DramaDto, ApiError> {
    api.post("/dramas", payload).await
}

pub async fn update(api: &ApiClient, id: i64, payload: &DramaPayload) -> Result<DramaDto, ApiError> {
    api.put(&format!("/dramas/{id}"), payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/dramas/{id}")).await
}

//! Actor endpoints.

use super::{ApiClient, ApiError};
use crate::client::list::ListQuery;
use crate::model::actor::{ActorDto, ActorPayload};
use crate::model::api::{ListPayload, PageData, PAGE_SIZE};

pub async fn list(api: &ApiClient, query: &ListQuery) -> Result<PageData<ActorDto>, ApiError> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("limit", PAGE_SIZE.to_string()),
    ];
    if !query.search.is_empty() {
        params.push(("search", query.search.clone()));
    }

    let payload: ListPayload<ActorDto> = api.get("/actors", &params).await?;
    Ok(payload.into())
}

pub async fn create(api: &ApiClient, payload: &ActorPayload) -> Result<ActorDto, ApiError> {
    api.post("/actors", payload).await
}

pub async fn update(api: &ApiClient, id: i64, payload: &ActorPayload) -> Result<ActorDto, ApiError> {
    api.put(&format!("/actors/{id}"), payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/actors/{id}")).await
}

//! Member administration endpoints, served under the analytics prefix.

use super::{ApiClient, ApiError};
use crate::client::list::ListQuery;
use crate::model::api::{ListPayload, PageData, PAGE_SIZE};
use crate::model::user::{UserDto, UserRole, UserRolePayload};

pub async fn list(api: &ApiClient, query: &ListQuery) -> Result<PageData<UserDto>, ApiError> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("limit", PAGE_SIZE.to_string()),
    ];
    if !query.search.is_empty() {
        params.push(("search", query.search.clone()));
    }

    let payload: ListPayload<UserDto> = api.get("/analytics/users", &params).await?;
    Ok(payload.into())
}

pub async fn update_role(api: &ApiClient, id: i64, role: UserRole) -> Result<UserDto, ApiError> {
    api.patch(&format!("/analytics/users/{id}/role"), &UserRolePayload { role })
        .await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/analytics/users/{id}")).await
}

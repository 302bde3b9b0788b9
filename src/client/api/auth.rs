//! Session endpoints.

use super::{ApiClient, ApiError};
use crate::model::auth::{LoginData, LoginPayload};
use crate::model::user::UserDto;

pub async fn login(api: &ApiClient, payload: &LoginPayload) -> Result<LoginData, ApiError> {
    api.post("/auth/login", payload).await
}

pub async fn me(api: &ApiClient) -> Result<UserDto, ApiError> {
    api.get("/auth/me", &[]).await
}

use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Successful login response: the bearer token plus the authenticated user.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserDto,
}

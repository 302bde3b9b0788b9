use validator::Validate;

use crate::model::auth::LoginPayload;

#[derive(Debug, Clone, Default, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl LoginForm {
    pub fn to_payload(&self) -> LoginPayload {
        LoginPayload {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

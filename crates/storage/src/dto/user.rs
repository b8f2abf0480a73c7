use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(default)]
    pub admin: bool,

    pub role_id: Option<i64>,

    #[validate(custom(function = "crate::dto::competition::validate_country_code"))]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub admin: Option<bool>,

    #[validate(custom(function = "crate::dto::competition::validate_country_code"))]
    pub country: Option<String>,
}

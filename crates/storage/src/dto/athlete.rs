use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAthleteRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255))]
    pub last_name: String,

    #[validate(custom(function = "crate::dto::competition::validate_country_code"))]
    pub country: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[validate(length(max = 64))]
    pub license_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    #[validate(custom(function = "crate::dto::competition::validate_country_code"))]
    pub country: Option<String>,

    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,

    #[validate(length(max = 64))]
    pub license_number: Option<String>,
}

fn validate_gender(gender: &str) -> Result<(), validator::ValidationError> {
    if gender == "F" || gender == "M" {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_gender"))
    }
}

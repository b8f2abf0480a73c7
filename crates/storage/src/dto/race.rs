use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRaceRequest {
    pub competition_id: i64,

    pub race_type_id: i64,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 64))]
    pub stage_type: String,

    #[validate(length(min = 1, max = 255))]
    pub stage_name: String,

    pub heat_number: Option<i64>,

    #[serde(default)]
    pub position: i64,

    pub scheduled_at: Option<chrono::NaiveDateTime>,

    #[validate(custom(function = "validate_gender_category"))]
    pub gender_category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateRaceRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub stage_type: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub stage_name: Option<String>,

    pub heat_number: Option<i64>,

    pub position: Option<i64>,

    pub scheduled_at: Option<chrono::NaiveDateTime>,

    #[validate(custom(function = "validate_gender_category"))]
    pub gender_category: Option<String>,
}

fn validate_gender_category(category: &str) -> Result<(), validator::ValidationError> {
    const VALID_CATEGORIES: &[&str] = &["women", "men", "mixed"];

    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_gender_category"))
    }
}

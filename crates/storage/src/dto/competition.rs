use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for creating a new competition
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCompetitionRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub city: String,

    #[validate(length(min = 1, max = 255))]
    pub place: String,

    #[validate(custom(function = "validate_country_code"))]
    pub country: String,

    pub description: Option<String>,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    #[validate(url(message = "Webpage must be a valid URL"))]
    pub webpage_url: Option<String>,
}

/// Request payload for updating an existing competition
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCompetitionRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub city: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub place: Option<String>,

    #[validate(custom(function = "validate_country_code"))]
    pub country: Option<String>,

    pub description: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    #[validate(url(message = "Webpage must be a valid URL"))]
    pub webpage_url: Option<String>,
}

pub(crate) fn validate_country_code(country: &str) -> Result<(), validator::ValidationError> {
    let is_valid = country.len() == 3 && country.chars().all(|c| c.is_ascii_uppercase());

    if is_valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_country_code"))
    }
}

impl CreateCompetitionRequest {
    /// Additional validation that requires multiple fields
    pub fn validate_dates(&self) -> Result<(), &'static str> {
        if self.end_date < self.start_date {
            return Err("End date must be on or after start date");
        }
        Ok(())
    }
}

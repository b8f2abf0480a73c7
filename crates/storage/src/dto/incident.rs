use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateIncidentRequest {
    pub race_id: i64,

    pub race_location_id: Option<i64>,

    pub reported_by: Option<i64>,

    #[validate(length(
        min = 1,
        max = 2000,
        message = "Description must be between 1 and 2000 characters"
    ))]
    pub description: String,
}

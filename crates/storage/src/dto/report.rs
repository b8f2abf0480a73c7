use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReportRequest {
    pub user_id: i64,

    pub incident_id: Option<i64>,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateReportRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    pub body: Option<String>,
}

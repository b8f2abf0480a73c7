use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Athlete {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub gender: String,
    pub license_number: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AthleteSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub gender: String,
}

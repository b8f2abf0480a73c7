use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum IncidentStatus {
    Unofficial,
    Official,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum IncidentDecision {
    Pending,
    PenaltyApplied,
    Rejected,
    NoAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Incident {
    pub id: i64,
    pub race_id: i64,
    pub race_name: String,
    pub competition_id: i64,
    /// Country of the parent competition, flattened in for national-referee
    /// visibility scoping.
    pub competition_country: String,
    pub race_location_id: Option<i64>,
    pub race_location_name: Option<String>,
    pub reported_by: Option<i64>,
    pub status: IncidentStatus,
    pub decision: IncidentDecision,
    pub description: String,
    pub created_at: chrono::NaiveDateTime,
}

impl Incident {
    pub fn unofficial(&self) -> bool {
        self.status == IncidentStatus::Unofficial
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct IncidentSummary {
    pub id: i64,
    pub race_id: i64,
    pub status: IncidentStatus,
    pub decision: IncidentDecision,
    pub description: String,
    pub created_at: chrono::NaiveDateTime,
}

impl IncidentSummary {
    pub fn unofficial(&self) -> bool {
        self.status == IncidentStatus::Unofficial
    }
}

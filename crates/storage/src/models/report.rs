use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ReportStatus {
    Draft,
    Submitted,
    Finalized,
}

impl ReportStatus {
    /// Forward-only lifecycle: draft -> submitted -> finalized.
    pub fn can_transition_to(&self, to: ReportStatus) -> bool {
        matches!(
            (self, to),
            (ReportStatus::Draft, ReportStatus::Submitted)
                | (ReportStatus::Submitted, ReportStatus::Finalized)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "draft",
            ReportStatus::Submitted => "submitted",
            ReportStatus::Finalized => "finalized",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Report {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub incident_id: Option<i64>,
    pub status: ReportStatus,
    pub title: String,
    pub body: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ReportSummary {
    pub id: i64,
    pub user_id: i64,
    pub status: ReportStatus,
    pub title: String,
    pub created_at: chrono::NaiveDateTime,
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum RaceStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl RaceStatus {
    /// Status transitions are monotonic: scheduled -> in_progress ->
    /// completed, with cancellation as a side-exit from any live state.
    pub fn can_transition_to(&self, to: RaceStatus) -> bool {
        matches!(
            (self, to),
            (RaceStatus::Scheduled, RaceStatus::InProgress)
                | (RaceStatus::Scheduled, RaceStatus::Cancelled)
                | (RaceStatus::InProgress, RaceStatus::Completed)
                | (RaceStatus::InProgress, RaceStatus::Cancelled)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RaceStatus::Scheduled => "scheduled",
            RaceStatus::InProgress => "in_progress",
            RaceStatus::Completed => "completed",
            RaceStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Race {
    pub id: i64,
    pub competition_id: i64,
    pub competition_name: String,
    pub race_type_id: i64,
    pub race_type_name: String,
    pub name: String,
    pub stage_type: String,
    pub stage_name: String,
    pub heat_number: Option<i64>,
    pub position: i64,
    pub status: RaceStatus,
    pub scheduled_at: Option<chrono::NaiveDateTime>,
    pub gender_category: String,
    pub created_at: chrono::NaiveDateTime,
}

impl Race {
    pub fn completed(&self) -> bool {
        self.status == RaceStatus::Completed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RaceSummary {
    pub id: i64,
    pub name: String,
    pub race_type_name: String,
    pub stage_name: String,
    pub heat_number: Option<i64>,
    pub position: i64,
    pub status: RaceStatus,
    pub scheduled_at: Option<chrono::NaiveDateTime>,
    pub gender_category: String,
}

impl RaceSummary {
    pub fn completed(&self) -> bool {
        self.status == RaceStatus::Completed
    }
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ParticipationStatus {
    Registered,
    Dns,
    Dnf,
    Dsq,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RaceParticipation {
    pub id: i64,
    pub race_id: i64,
    pub athlete_id: i64,
    pub athlete_first_name: String,
    pub athlete_last_name: String,
    pub athlete_country: String,
    pub bib_number: i64,
    pub heat: Option<i64>,
    pub active_in_heat: bool,
    pub status: ParticipationStatus,
    pub start_time: Option<chrono::NaiveDateTime>,
    pub finish_time: Option<chrono::NaiveDateTime>,
    pub rank: Option<i64>,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RaceParticipationSummary {
    pub id: i64,
    pub race_id: i64,
    pub athlete_first_name: String,
    pub athlete_last_name: String,
    pub bib_number: i64,
    pub status: ParticipationStatus,
    pub rank: Option<i64>,
}

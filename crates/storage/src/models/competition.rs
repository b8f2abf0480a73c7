use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Derived from today's date relative to [start_date, end_date]; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionStatus {
    Upcoming,
    Ongoing,
    Past,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Competition {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub place: String,
    pub country: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub webpage_url: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

impl Competition {
    pub fn status_on(&self, today: NaiveDate) -> CompetitionStatus {
        if today < self.start_date {
            CompetitionStatus::Upcoming
        } else if today > self.end_date {
            CompetitionStatus::Past
        } else {
            CompetitionStatus::Ongoing
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CompetitionSummary {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub country: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl CompetitionSummary {
    pub fn status_on(&self, today: NaiveDate) -> CompetitionStatus {
        if today < self.start_date {
            CompetitionStatus::Upcoming
        } else if today > self.end_date {
            CompetitionStatus::Past
        } else {
            CompetitionStatus::Ongoing
        }
    }
}

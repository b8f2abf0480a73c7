use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{ParticipationStatus, RaceParticipation};

/// One row of a start-list import.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParticipationImport {
    pub race_id: i64,

    pub athlete_id: i64,

    #[validate(range(min = 1, message = "Bib number must be positive"))]
    pub bib_number: i64,

    pub heat: Option<i64>,
}

/// Per-row outcome of a start-list import, so bulk flows can aggregate
/// failures instead of aborting on the first bad row.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportResult {
    Created(RaceParticipation),
    Rejected { reason: String },
}

impl ImportResult {
    pub fn is_created(&self) -> bool {
        matches!(self, ImportResult::Created(_))
    }
}

/// Timing and ranking data recorded once a participation has a result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipationResult {
    pub status: ParticipationStatus,
    pub start_time: Option<chrono::NaiveDateTime>,
    pub finish_time: Option<chrono::NaiveDateTime>,
    pub rank: Option<i64>,
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum PenaltySeverity {
    Disqualification,
    TimePenalty,
    NotApplicable,
}

/// One ISMF penalty code with its severity per race format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Penalty {
    pub id: i64,
    pub code: String,
    pub category: String,
    pub description: String,
    pub individual: PenaltySeverity,
    pub team: PenaltySeverity,
    pub sprint: PenaltySeverity,
    pub vertical: PenaltySeverity,
    pub mixed_relay: PenaltySeverity,
}

impl Penalty {
    /// Severity of this code for a race type, by race type name.
    pub fn severity_for(&self, race_type_name: &str) -> Option<PenaltySeverity> {
        match race_type_name {
            "Individual" => Some(self.individual),
            "Team" => Some(self.team),
            "Sprint" => Some(self.sprint),
            "Vertical" => Some(self.vertical),
            "Mixed Relay" => Some(self.mixed_relay),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PenaltySummary {
    pub id: i64,
    pub code: String,
    pub category: String,
}

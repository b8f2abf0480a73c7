use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum LocationKind {
    /// Inherited from the race type's location template.
    Standard,
    /// Added for a specific race.
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RaceLocation {
    pub id: i64,
    pub race_id: i64,
    pub name: String,
    pub kind: LocationKind,
    pub position: i64,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RaceLocationSummary {
    pub id: i64,
    pub name: String,
    pub kind: LocationKind,
    pub position: i64,
}

/// Camera/observer location defined per race type, copied onto races as
/// standard locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RaceTypeLocationTemplate {
    pub id: i64,
    pub race_type_id: i64,
    pub name: String,
    pub position: i64,
}

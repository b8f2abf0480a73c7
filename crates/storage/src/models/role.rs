use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The closed set of permission levels a user can hold. Stored as snake_case
/// text in the `roles` table and on join rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum RoleName {
    VarOperator,
    NationalReferee,
    InternationalReferee,
    JuryPresident,
    RefereeManager,
    BroadcastViewer,
}

impl RoleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::VarOperator => "var_operator",
            RoleName::NationalReferee => "national_referee",
            RoleName::InternationalReferee => "international_referee",
            RoleName::JuryPresident => "jury_president",
            RoleName::RefereeManager => "referee_manager",
            RoleName::BroadcastViewer => "broadcast_viewer",
        }
    }

    pub const ALL: [RoleName; 6] = [
        RoleName::VarOperator,
        RoleName::NationalReferee,
        RoleName::InternationalReferee,
        RoleName::JuryPresident,
        RoleName::RefereeManager,
        RoleName::BroadcastViewer,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Role {
    pub id: i64,
    pub name: RoleName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RoleSummary {
    pub id: i64,
    pub name: RoleName,
}

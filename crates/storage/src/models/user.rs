use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::RoleName;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub admin: bool,
    pub role_id: Option<i64>,
    /// Role name flattened from the joined `roles` row.
    pub role: Option<RoleName>,
    pub country: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub admin: bool,
    pub role: Option<RoleName>,
}

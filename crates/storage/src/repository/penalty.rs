use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{Penalty, PenaltySummary};
use crate::repository::base::Repository;

/// Reference data: the ISMF penalty catalogue seeded by the migration.
pub struct PenaltyRepository<'a> {
    pool: &'a SqlitePool,
}

impl Repository for PenaltyRepository<'_> {
    type Entity = Penalty;
    type Summary = PenaltySummary;

    const TABLE: &'static str = "penalties";
    const SELECT_ENTITY: &'static str = "\
        SELECT id, code, category, description, individual, team, sprint, vertical, mixed_relay \
        FROM penalties";
    const SELECT_SUMMARY: &'static str = "SELECT id, code, category FROM penalties";
    const ID_COLUMN: &'static str = "id";
    const DEFAULT_ORDER: &'static str = "code ASC";

    fn pool(&self) -> &SqlitePool {
        self.pool
    }
}

impl<'a> PenaltyRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Penalty>> {
        let sql = format!("{} WHERE code = $1", Self::SELECT_ENTITY);
        let penalty = sqlx::query_as::<_, Penalty>(&sql)
            .bind(code)
            .fetch_optional(self.pool)
            .await?;

        Ok(penalty)
    }

    /// All codes in one ISMF category (A through F)
    pub async fn for_category(&self, category: &str) -> Result<Vec<PenaltySummary>> {
        let sql = format!(
            "{} WHERE category = $1 ORDER BY {}",
            Self::SELECT_SUMMARY,
            Self::DEFAULT_ORDER
        );
        let penalties = sqlx::query_as::<_, PenaltySummary>(&sql)
            .bind(category)
            .fetch_all(self.pool)
            .await?;

        Ok(penalties)
    }
}

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{RaceType, RaceTypeSummary};
use crate::repository::base::Repository;

/// Reference data: the five ISMF race formats seeded by the migration.
pub struct RaceTypeRepository<'a> {
    pool: &'a SqlitePool,
}

impl Repository for RaceTypeRepository<'_> {
    type Entity = RaceType;
    type Summary = RaceTypeSummary;

    const TABLE: &'static str = "race_types";
    const SELECT_ENTITY: &'static str = "SELECT id, name, description FROM race_types";
    const SELECT_SUMMARY: &'static str = "SELECT id, name FROM race_types";
    const ID_COLUMN: &'static str = "id";
    const DEFAULT_ORDER: &'static str = "id ASC";

    fn pool(&self) -> &SqlitePool {
        self.pool
    }
}

impl<'a> RaceTypeRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<RaceType>> {
        let sql = format!("{} WHERE name = $1", Self::SELECT_ENTITY);
        let race_type = sqlx::query_as::<_, RaceType>(&sql)
            .bind(name)
            .fetch_optional(self.pool)
            .await?;

        Ok(race_type)
    }
}

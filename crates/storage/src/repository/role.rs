use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{Role, RoleName, RoleSummary};
use crate::repository::base::Repository;

/// Reference data: the fixed role set seeded by the migration.
pub struct RoleRepository<'a> {
    pool: &'a SqlitePool,
}

impl Repository for RoleRepository<'_> {
    type Entity = Role;
    type Summary = RoleSummary;

    const TABLE: &'static str = "roles";
    const SELECT_ENTITY: &'static str = "SELECT id, name FROM roles";
    const SELECT_SUMMARY: &'static str = "SELECT id, name FROM roles";
    const ID_COLUMN: &'static str = "id";
    const DEFAULT_ORDER: &'static str = "id ASC";

    fn pool(&self) -> &SqlitePool {
        self.pool
    }
}

impl<'a> RoleRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_name(&self, name: RoleName) -> Result<Option<Role>> {
        let sql = format!("{} WHERE name = $1", Self::SELECT_ENTITY);
        let role = sqlx::query_as::<_, Role>(&sql)
            .bind(name)
            .fetch_optional(self.pool)
            .await?;

        Ok(role)
    }
}

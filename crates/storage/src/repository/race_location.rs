use sqlx::SqlitePool;

use crate::dto::CreateLocationRequest;
use crate::error::Result;
use crate::models::{LocationKind, RaceLocation, RaceLocationSummary, RaceTypeLocationTemplate};
use crate::repository::base::{Repository, translate_constraint};

pub struct RaceLocationRepository<'a> {
    pool: &'a SqlitePool,
}

impl Repository for RaceLocationRepository<'_> {
    type Entity = RaceLocation;
    type Summary = RaceLocationSummary;

    const TABLE: &'static str = "race_locations";
    const SELECT_ENTITY: &'static str = "\
        SELECT id, race_id, name, kind, position, created_at \
        FROM race_locations";
    const SELECT_SUMMARY: &'static str = "\
        SELECT id, name, kind, position \
        FROM race_locations";
    const ID_COLUMN: &'static str = "id";
    const DEFAULT_ORDER: &'static str = "position ASC, id ASC";

    fn pool(&self) -> &SqlitePool {
        self.pool
    }
}

impl<'a> RaceLocationRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Camera/observer locations of one race in course order
    pub async fn for_race(&self, race_id: i64) -> Result<Vec<RaceLocationSummary>> {
        let sql = format!(
            "{} WHERE race_id = $1 ORDER BY {}",
            Self::SELECT_SUMMARY,
            Self::DEFAULT_ORDER
        );
        let locations = sqlx::query_as::<_, RaceLocationSummary>(&sql)
            .bind(race_id)
            .fetch_all(self.pool)
            .await?;

        Ok(locations)
    }

    /// Adds a race-specific location on top of the standard set
    pub async fn create_custom(&self, req: &CreateLocationRequest) -> Result<RaceLocation> {
        let location = sqlx::query_as::<_, RaceLocation>(
            r#"
            INSERT INTO race_locations (race_id, name, kind, position)
            VALUES ($1, $2, $3, $4)
            RETURNING id, race_id, name, kind, position, created_at
            "#,
        )
        .bind(req.race_id)
        .bind(&req.name)
        .bind(LocationKind::Custom)
        .bind(req.position)
        .fetch_one(self.pool)
        .await
        .map_err(|e| translate_constraint(e, "Location references a missing race"))?;

        Ok(location)
    }

    /// Copies the race type's template locations onto a race as its
    /// standard set, then returns the race's full location list.
    pub async fn instantiate_template(
        &self,
        race_id: i64,
        race_type_id: i64,
    ) -> Result<Vec<RaceLocationSummary>> {
        sqlx::query(
            r#"
            INSERT INTO race_locations (race_id, name, kind, position)
            SELECT $1, name, $3, position
            FROM race_type_location_templates
            WHERE race_type_id = $2
            ORDER BY position
            "#,
        )
        .bind(race_id)
        .bind(race_type_id)
        .bind(LocationKind::Standard)
        .execute(self.pool)
        .await
        .map_err(|e| translate_constraint(e, "Location references a missing race"))?;

        self.for_race(race_id).await
    }

    /// Template rows defined for a race type
    pub async fn templates_for(&self, race_type_id: i64) -> Result<Vec<RaceTypeLocationTemplate>> {
        let templates = sqlx::query_as::<_, RaceTypeLocationTemplate>(
            r#"
            SELECT id, race_type_id, name, position
            FROM race_type_location_templates
            WHERE race_type_id = $1
            ORDER BY position ASC, id ASC
            "#,
        )
        .bind(race_type_id)
        .fetch_all(self.pool)
        .await?;

        Ok(templates)
    }

    /// Defines a template location for a race type
    pub async fn create_template(
        &self,
        race_type_id: i64,
        name: &str,
        position: i64,
    ) -> Result<RaceTypeLocationTemplate> {
        let template = sqlx::query_as::<_, RaceTypeLocationTemplate>(
            r#"
            INSERT INTO race_type_location_templates (race_type_id, name, position)
            VALUES ($1, $2, $3)
            RETURNING id, race_type_id, name, position
            "#,
        )
        .bind(race_type_id)
        .bind(name)
        .bind(position)
        .fetch_one(self.pool)
        .await
        .map_err(|e| translate_constraint(e, "Template references a missing race type"))?;

        Ok(template)
    }
}

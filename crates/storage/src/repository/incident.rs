use sqlx::SqlitePool;

use crate::dto::CreateIncidentRequest;
use crate::error::Result;
use crate::models::{Incident, IncidentDecision, IncidentStatus, IncidentSummary};
use crate::repository::base::{Repository, translate_constraint};

pub struct IncidentRepository<'a> {
    pool: &'a SqlitePool,
}

impl Repository for IncidentRepository<'_> {
    type Entity = Incident;
    type Summary = IncidentSummary;

    const TABLE: &'static str = "incidents";
    const SELECT_ENTITY: &'static str = "\
        SELECT incidents.id, incidents.race_id, races.name AS race_name, \
               competitions.id AS competition_id, \
               competitions.country AS competition_country, \
               incidents.race_location_id, race_locations.name AS race_location_name, \
               incidents.reported_by, incidents.status, incidents.decision, \
               incidents.description, incidents.created_at \
        FROM incidents \
        JOIN races ON races.id = incidents.race_id \
        JOIN competitions ON competitions.id = races.competition_id \
        LEFT JOIN race_locations ON race_locations.id = incidents.race_location_id";
    const SELECT_SUMMARY: &'static str = "\
        SELECT incidents.id, incidents.race_id, incidents.status, incidents.decision, \
               incidents.description, incidents.created_at \
        FROM incidents";
    const ID_COLUMN: &'static str = "incidents.id";
    const DEFAULT_ORDER: &'static str = "incidents.created_at DESC, incidents.id DESC";

    fn pool(&self) -> &SqlitePool {
        self.pool
    }
}

impl<'a> IncidentRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &CreateIncidentRequest) -> Result<Incident> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO incidents (race_id, race_location_id, reported_by, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(req.race_id)
        .bind(req.race_location_id)
        .bind(req.reported_by)
        .bind(&req.description)
        .fetch_one(self.pool)
        .await
        .map_err(|e| translate_constraint(e, "Incident references a missing race or location"))?;

        self.get(id).await
    }

    /// Incidents raised against one race, newest first
    pub async fn for_race(&self, race_id: i64) -> Result<Vec<IncidentSummary>> {
        let sql = format!(
            "{} WHERE incidents.race_id = $1 ORDER BY {}",
            Self::SELECT_SUMMARY,
            Self::DEFAULT_ORDER
        );
        let incidents = sqlx::query_as::<_, IncidentSummary>(&sql)
            .bind(race_id)
            .fetch_all(self.pool)
            .await?;

        Ok(incidents)
    }

    /// Incidents whose parent competition is held in the given country.
    /// Single joined query; national-referee visibility filters here
    /// instead of loading everything and filtering in memory.
    pub async fn for_country(&self, country: &str) -> Result<Vec<IncidentSummary>> {
        let sql = format!(
            "{} JOIN races ON races.id = incidents.race_id \
             JOIN competitions ON competitions.id = races.competition_id \
             WHERE competitions.country = $1 ORDER BY {}",
            Self::SELECT_SUMMARY,
            Self::DEFAULT_ORDER
        );
        let incidents = sqlx::query_as::<_, IncidentSummary>(&sql)
            .bind(country)
            .fetch_all(self.pool)
            .await?;

        Ok(incidents)
    }

    /// Promotes an unofficial incident to official
    pub async fn officialize(&self, id: i64) -> Result<Incident> {
        sqlx::query("UPDATE incidents SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(IncidentStatus::Official)
            .execute(self.pool)
            .await?;

        self.get(id).await
    }

    /// Records the jury president's decision on the incident
    pub async fn set_decision(&self, id: i64, decision: IncidentDecision) -> Result<Incident> {
        sqlx::query("UPDATE incidents SET decision = $2 WHERE id = $1")
            .bind(id)
            .bind(decision)
            .execute(self.pool)
            .await?;

        self.get(id).await
    }
}

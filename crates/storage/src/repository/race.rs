use chrono::{NaiveDate, NaiveDateTime};
use sqlx::SqlitePool;

use crate::dto::{CreateRaceRequest, UpdateRaceRequest};
use crate::error::{Result, StorageError};
use crate::models::{Race, RaceStatus, RaceSummary};
use crate::repository::base::{Repository, translate_constraint};

pub struct RaceRepository<'a> {
    pool: &'a SqlitePool,
}

impl Repository for RaceRepository<'_> {
    type Entity = Race;
    type Summary = RaceSummary;

    const TABLE: &'static str = "races";
    const SELECT_ENTITY: &'static str = "\
        SELECT races.id, races.competition_id, competitions.name AS competition_name, \
               races.race_type_id, race_types.name AS race_type_name, \
               races.name, races.stage_type, races.stage_name, races.heat_number, \
               races.position, races.status, races.scheduled_at, races.gender_category, \
               races.created_at \
        FROM races \
        JOIN competitions ON competitions.id = races.competition_id \
        JOIN race_types ON race_types.id = races.race_type_id";
    const SELECT_SUMMARY: &'static str = "\
        SELECT races.id, races.name, race_types.name AS race_type_name, \
               races.stage_name, races.heat_number, races.position, races.status, \
               races.scheduled_at, races.gender_category \
        FROM races \
        JOIN race_types ON race_types.id = races.race_type_id";
    const ID_COLUMN: &'static str = "races.id";
    const DEFAULT_ORDER: &'static str = "races.position ASC, races.id ASC";

    fn pool(&self) -> &SqlitePool {
        self.pool
    }
}

impl<'a> RaceRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &CreateRaceRequest) -> Result<Race> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO races (competition_id, race_type_id, name, stage_type, stage_name,
                               heat_number, position, scheduled_at, gender_category)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(req.competition_id)
        .bind(req.race_type_id)
        .bind(&req.name)
        .bind(&req.stage_type)
        .bind(&req.stage_name)
        .bind(req.heat_number)
        .bind(req.position)
        .bind(req.scheduled_at)
        .bind(&req.gender_category)
        .fetch_one(self.pool)
        .await
        .map_err(|e| translate_constraint(e, "Race references a missing competition or race type"))?;

        self.get(id).await
    }

    pub async fn update(&self, id: i64, req: &UpdateRaceRequest) -> Result<Race> {
        let existing = self.get(id).await?;

        let name = req.name.as_ref().unwrap_or(&existing.name);
        let stage_type = req.stage_type.as_ref().unwrap_or(&existing.stage_type);
        let stage_name = req.stage_name.as_ref().unwrap_or(&existing.stage_name);
        let heat_number = req.heat_number.or(existing.heat_number);
        let position = req.position.unwrap_or(existing.position);
        let scheduled_at = req.scheduled_at.or(existing.scheduled_at);
        let gender_category = req
            .gender_category
            .as_ref()
            .unwrap_or(&existing.gender_category);

        sqlx::query(
            r#"
            UPDATE races
            SET name = $2, stage_type = $3, stage_name = $4, heat_number = $5,
                position = $6, scheduled_at = $7, gender_category = $8
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(stage_type)
        .bind(stage_name)
        .bind(heat_number)
        .bind(position)
        .bind(scheduled_at)
        .bind(gender_category)
        .execute(self.pool)
        .await?;

        self.get(id).await
    }

    /// Races of one competition in schedule order
    pub async fn for_competition(&self, competition_id: i64) -> Result<Vec<RaceSummary>> {
        let sql = format!(
            "{} WHERE races.competition_id = $1 ORDER BY {}",
            Self::SELECT_SUMMARY,
            Self::DEFAULT_ORDER
        );
        let races = sqlx::query_as::<_, RaceSummary>(&sql)
            .bind(competition_id)
            .fetch_all(self.pool)
            .await?;

        Ok(races)
    }

    /// Scheduled races whose start time has passed, feeding the periodic
    /// status sweep.
    pub async fn auto_startable(&self, now: NaiveDateTime) -> Result<Vec<RaceSummary>> {
        let sql = format!(
            "{} WHERE races.status = $1 AND races.scheduled_at IS NOT NULL \
             AND races.scheduled_at <= $2 ORDER BY races.scheduled_at ASC, races.id ASC",
            Self::SELECT_SUMMARY
        );
        let races = sqlx::query_as::<_, RaceSummary>(&sql)
            .bind(RaceStatus::Scheduled)
            .bind(now)
            .fetch_all(self.pool)
            .await?;

        Ok(races)
    }

    /// Races still in progress after their whole competition has ended.
    /// The boundary is strict: a race is only force-completed the day
    /// after the competition's end date.
    pub async fn auto_completable(&self, today: NaiveDate) -> Result<Vec<RaceSummary>> {
        let sql = format!(
            "{} JOIN competitions ON competitions.id = races.competition_id \
             WHERE races.status = $1 AND competitions.end_date < $2 \
             ORDER BY {}",
            Self::SELECT_SUMMARY,
            Self::DEFAULT_ORDER
        );
        let races = sqlx::query_as::<_, RaceSummary>(&sql)
            .bind(RaceStatus::InProgress)
            .bind(today)
            .fetch_all(self.pool)
            .await?;

        Ok(races)
    }

    /// Moves a race along its status lattice, rejecting non-monotonic
    /// transitions.
    pub async fn transition(&self, id: i64, to: RaceStatus) -> Result<Race> {
        let race = self.get(id).await?;

        if !race.status.can_transition_to(to) {
            return Err(StorageError::ConstraintViolation(format!(
                "Cannot move race from {} to {}",
                race.status.as_str(),
                to.as_str()
            )));
        }

        sqlx::query("UPDATE races SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(to)
            .execute(self.pool)
            .await?;

        self.get(id).await
    }
}

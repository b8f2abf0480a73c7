use sqlx::SqlitePool;

use crate::dto::{ImportResult, ParticipationImport, ParticipationResult};
use crate::error::Result;
use crate::models::{ParticipationStatus, RaceParticipation, RaceParticipationSummary};
use crate::repository::base::{Criteria, Repository, translate_constraint};

pub struct RaceParticipationRepository<'a> {
    pool: &'a SqlitePool,
}

impl Repository for RaceParticipationRepository<'_> {
    type Entity = RaceParticipation;
    type Summary = RaceParticipationSummary;

    const TABLE: &'static str = "race_participations";
    const SELECT_ENTITY: &'static str = "\
        SELECT race_participations.id, race_participations.race_id, \
               race_participations.athlete_id, \
               athletes.first_name AS athlete_first_name, \
               athletes.last_name AS athlete_last_name, \
               athletes.country AS athlete_country, \
               race_participations.bib_number, race_participations.heat, \
               race_participations.active_in_heat, race_participations.status, \
               race_participations.start_time, race_participations.finish_time, \
               race_participations.rank, race_participations.created_at \
        FROM race_participations \
        JOIN athletes ON athletes.id = race_participations.athlete_id";
    const SELECT_SUMMARY: &'static str = "\
        SELECT race_participations.id, race_participations.race_id, \
               athletes.first_name AS athlete_first_name, \
               athletes.last_name AS athlete_last_name, \
               race_participations.bib_number, race_participations.status, \
               race_participations.rank \
        FROM race_participations \
        JOIN athletes ON athletes.id = race_participations.athlete_id";
    const ID_COLUMN: &'static str = "race_participations.id";
    const DEFAULT_ORDER: &'static str =
        "race_participations.bib_number ASC, race_participations.id ASC";

    fn pool(&self) -> &SqlitePool {
        self.pool
    }
}

impl<'a> RaceParticipationRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Start list of one race in bib order
    pub async fn for_race(&self, race_id: i64) -> Result<Vec<RaceParticipationSummary>> {
        let sql = format!(
            "{} WHERE race_participations.race_id = $1 ORDER BY {}",
            Self::SELECT_SUMMARY,
            Self::DEFAULT_ORDER
        );
        let participations = sqlx::query_as::<_, RaceParticipationSummary>(&sql)
            .bind(race_id)
            .fetch_all(self.pool)
            .await?;

        Ok(participations)
    }

    /// Registers one imported start-list row, reporting duplicate athletes
    /// and reused bib numbers as per-row rejections instead of errors.
    ///
    /// The pre-checks are a fast path for readable messages; the unique
    /// indexes on (race_id, athlete_id) and (race_id, bib_number) stay
    /// authoritative under concurrent imports, and a violation that slips
    /// past the pre-checks folds into the same rejection.
    pub async fn create_for_import(&self, req: &ParticipationImport) -> Result<ImportResult> {
        let athlete_taken = Criteria::new()
            .field("race_id", req.race_id)
            .field("athlete_id", req.athlete_id);
        if self.exists(&athlete_taken).await? {
            return Ok(ImportResult::Rejected {
                reason: "Athlete already assigned to this race".to_string(),
            });
        }

        let bib_taken = Criteria::new()
            .field("race_id", req.race_id)
            .field("bib_number", req.bib_number);
        if self.exists(&bib_taken).await? {
            return Ok(ImportResult::Rejected {
                reason: format!("Bib number {} already assigned", req.bib_number),
            });
        }

        let inserted = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO race_participations (race_id, athlete_id, bib_number, heat)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(req.race_id)
        .bind(req.athlete_id)
        .bind(req.bib_number)
        .bind(req.heat)
        .fetch_one(self.pool)
        .await;

        match inserted {
            Ok(id) => Ok(ImportResult::Created(self.get(id).await?)),
            Err(sqlx::Error::Database(db))
                if matches!(db.code().as_deref(), Some("2067") | Some("1555")) =>
            {
                // Lost a check-then-act race against a concurrent import.
                let reason = if db.message().contains("athlete_id") {
                    "Athlete already assigned to this race".to_string()
                } else {
                    format!("Bib number {} already assigned", req.bib_number)
                };
                tracing::warn!(race_id = req.race_id, "import row rejected: {reason}");
                Ok(ImportResult::Rejected { reason })
            }
            Err(e) => Err(translate_constraint(
                e,
                "Participation references a missing race or athlete",
            )),
        }
    }

    /// Records timing and ranking once a participation has a result
    pub async fn record_result(
        &self,
        id: i64,
        result: &ParticipationResult,
    ) -> Result<RaceParticipation> {
        sqlx::query(
            r#"
            UPDATE race_participations
            SET status = $2, start_time = $3, finish_time = $4, rank = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(result.status)
        .bind(result.start_time)
        .bind(result.finish_time)
        .bind(result.rank)
        .execute(self.pool)
        .await?;

        self.get(id).await
    }

    pub async fn set_status(&self, id: i64, status: ParticipationStatus) -> Result<RaceParticipation> {
        sqlx::query("UPDATE race_participations SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(self.pool)
            .await?;

        self.get(id).await
    }

    /// Marks which participations run in the given heat
    pub async fn set_active_heat(&self, race_id: i64, heat: i64) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE race_participations
            SET active_in_heat = (heat IS $2)
            WHERE race_id = $1
            "#,
        )
        .bind(race_id)
        .bind(heat)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

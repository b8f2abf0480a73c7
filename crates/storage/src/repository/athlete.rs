use sqlx::SqlitePool;

use crate::dto::{CreateAthleteRequest, UpdateAthleteRequest};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, AthleteSummary};
use crate::repository::base::{Criteria, Repository, translate_constraint};

pub struct AthleteRepository<'a> {
    pool: &'a SqlitePool,
}

impl Repository for AthleteRepository<'_> {
    type Entity = Athlete;
    type Summary = AthleteSummary;

    const TABLE: &'static str = "athletes";
    const SELECT_ENTITY: &'static str = "\
        SELECT id, first_name, last_name, country, gender, license_number, created_at \
        FROM athletes";
    const SELECT_SUMMARY: &'static str = "\
        SELECT id, first_name, last_name, country, gender \
        FROM athletes";
    const ID_COLUMN: &'static str = "id";
    const DEFAULT_ORDER: &'static str = "last_name ASC, first_name ASC, id ASC";

    fn pool(&self) -> &SqlitePool {
        self.pool
    }
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO athletes (first_name, last_name, country, gender, license_number)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, country, gender, license_number, created_at
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.country)
        .bind(&req.gender)
        .bind(&req.license_number)
        .fetch_one(self.pool)
        .await
        .map_err(|e| translate_constraint(e, "Athlete already exists"))?;

        Ok(athlete)
    }

    pub async fn update(&self, id: i64, req: &UpdateAthleteRequest) -> Result<Athlete> {
        let existing = self.get(id).await?;

        let first_name = req.first_name.as_ref().unwrap_or(&existing.first_name);
        let last_name = req.last_name.as_ref().unwrap_or(&existing.last_name);
        let country = req.country.as_ref().unwrap_or(&existing.country);
        let gender = req.gender.as_ref().unwrap_or(&existing.gender);
        let license_number = req
            .license_number
            .as_ref()
            .or(existing.license_number.as_ref());

        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            UPDATE athletes
            SET first_name = $2, last_name = $3, country = $4, gender = $5, license_number = $6
            WHERE id = $1
            RETURNING id, first_name, last_name, country, gender, license_number, created_at
            "#,
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(country)
        .bind(gender)
        .bind(license_number)
        .fetch_one(self.pool)
        .await
        .map_err(|e| translate_constraint(e, "Athlete already exists"))?;

        Ok(athlete)
    }

    /// Idempotent upsert keyed by the import identity tuple. The unique
    /// index is the authoritative guard: losing a race to a concurrent
    /// import degrades to a lookup of the winner's row.
    pub async fn find_or_create_by(
        &self,
        first_name: &str,
        last_name: &str,
        gender: &str,
        country: &str,
    ) -> Result<(Athlete, bool)> {
        let identity = Criteria::new()
            .field("first_name", first_name)
            .field("last_name", last_name)
            .field("gender", gender)
            .field("country", country);

        if let Some(existing) = self.find_by(&identity).await? {
            return Ok((existing, false));
        }

        let inserted = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO athletes (first_name, last_name, country, gender)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, country, gender, license_number, created_at
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(country)
        .bind(gender)
        .fetch_one(self.pool)
        .await;

        match inserted {
            Ok(athlete) => Ok((athlete, true)),
            Err(e) => match translate_constraint(e, "Athlete already exists") {
                StorageError::ConstraintViolation(_) => {
                    let athlete = self
                        .find_by(&identity)
                        .await?
                        .ok_or(StorageError::NotFound)?;
                    Ok((athlete, false))
                }
                other => Err(other),
            },
        }
    }

    /// Case-insensitive substring search over first and last name
    pub async fn search(&self, query: &str) -> Result<Vec<AthleteSummary>> {
        let pattern = format!("%{}%", query.to_lowercase());
        let sql = format!(
            "{} WHERE LOWER(first_name) LIKE $1 OR LOWER(last_name) LIKE $1 ORDER BY {}",
            Self::SELECT_SUMMARY,
            Self::DEFAULT_ORDER
        );
        let athletes = sqlx::query_as::<_, AthleteSummary>(&sql)
            .bind(pattern)
            .fetch_all(self.pool)
            .await?;

        Ok(athletes)
    }
}

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::dto::{CreateCompetitionRequest, UpdateCompetitionRequest};
use crate::error::Result;
use crate::models::{Competition, CompetitionSummary};
use crate::repository::base::{Repository, translate_constraint};

/// Repository for Competition database operations
pub struct CompetitionRepository<'a> {
    pool: &'a SqlitePool,
}

impl Repository for CompetitionRepository<'_> {
    type Entity = Competition;
    type Summary = CompetitionSummary;

    const TABLE: &'static str = "competitions";
    const SELECT_ENTITY: &'static str = "\
        SELECT id, name, city, place, country, description, start_date, end_date, \
               webpage_url, created_at \
        FROM competitions";
    const SELECT_SUMMARY: &'static str = "\
        SELECT id, name, city, country, start_date, end_date \
        FROM competitions";
    const ID_COLUMN: &'static str = "id";
    const DEFAULT_ORDER: &'static str = "start_date DESC, id DESC";

    fn pool(&self) -> &SqlitePool {
        self.pool
    }
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new competition
    pub async fn create(&self, req: &CreateCompetitionRequest) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            INSERT INTO competitions (name, city, place, country, description, start_date, end_date, webpage_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, city, place, country, description, start_date, end_date, webpage_url, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.city)
        .bind(&req.place)
        .bind(&req.country)
        .bind(&req.description)
        .bind(req.start_date)
        .bind(req.end_date)
        .bind(&req.webpage_url)
        .fetch_one(self.pool)
        .await
        .map_err(|e| translate_constraint(e, "End date must be on or after start date"))?;

        Ok(competition)
    }

    /// Update an existing competition, keeping unspecified fields
    pub async fn update(&self, id: i64, req: &UpdateCompetitionRequest) -> Result<Competition> {
        let existing = self.get(id).await?;

        let name = req.name.as_ref().unwrap_or(&existing.name);
        let city = req.city.as_ref().unwrap_or(&existing.city);
        let place = req.place.as_ref().unwrap_or(&existing.place);
        let country = req.country.as_ref().unwrap_or(&existing.country);
        let description = req.description.as_ref().or(existing.description.as_ref());
        let start_date = req.start_date.unwrap_or(existing.start_date);
        let end_date = req.end_date.unwrap_or(existing.end_date);
        let webpage_url = req.webpage_url.as_ref().or(existing.webpage_url.as_ref());

        let competition = sqlx::query_as::<_, Competition>(
            r#"
            UPDATE competitions
            SET name = $2, city = $3, place = $4, country = $5, description = $6,
                start_date = $7, end_date = $8, webpage_url = $9
            WHERE id = $1
            RETURNING id, name, city, place, country, description, start_date, end_date, webpage_url, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(city)
        .bind(place)
        .bind(country)
        .bind(description)
        .bind(start_date)
        .bind(end_date)
        .bind(webpage_url)
        .fetch_one(self.pool)
        .await
        .map_err(|e| translate_constraint(e, "End date must be on or after start date"))?;

        Ok(competition)
    }

    /// Case-insensitive substring search over name, city and place
    pub async fn search(&self, query: &str) -> Result<Vec<CompetitionSummary>> {
        let pattern = format!("%{}%", query.to_lowercase());
        let sql = format!(
            "{} WHERE LOWER(name) LIKE $1 OR LOWER(city) LIKE $1 OR LOWER(place) LIKE $1 \
             ORDER BY {}",
            Self::SELECT_SUMMARY,
            Self::DEFAULT_ORDER
        );
        let competitions = sqlx::query_as::<_, CompetitionSummary>(&sql)
            .bind(pattern)
            .fetch_all(self.pool)
            .await?;

        Ok(competitions)
    }

    /// Competitions whose date range contains the given day
    pub async fn ongoing(&self, today: NaiveDate) -> Result<Vec<CompetitionSummary>> {
        let sql = format!(
            "{} WHERE start_date <= $1 AND end_date >= $1 ORDER BY {}",
            Self::SELECT_SUMMARY,
            Self::DEFAULT_ORDER
        );
        let competitions = sqlx::query_as::<_, CompetitionSummary>(&sql)
            .bind(today)
            .fetch_all(self.pool)
            .await?;

        Ok(competitions)
    }

    /// Competitions that have not started yet, soonest first
    pub async fn upcoming(&self, today: NaiveDate) -> Result<Vec<CompetitionSummary>> {
        let sql = format!(
            "{} WHERE start_date > $1 ORDER BY start_date ASC, id ASC",
            Self::SELECT_SUMMARY
        );
        let competitions = sqlx::query_as::<_, CompetitionSummary>(&sql)
            .bind(today)
            .fetch_all(self.pool)
            .await?;

        Ok(competitions)
    }
}

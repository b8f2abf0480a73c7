use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Session, SessionSummary};
use crate::repository::base::{Repository, translate_constraint};

pub struct SessionRepository<'a> {
    pool: &'a SqlitePool,
}

impl Repository for SessionRepository<'_> {
    type Entity = Session;
    type Summary = SessionSummary;

    const TABLE: &'static str = "sessions";
    const SELECT_ENTITY: &'static str = "\
        SELECT id, user_id, token, expires_at, created_at \
        FROM sessions";
    const SELECT_SUMMARY: &'static str = "SELECT id, user_id, expires_at FROM sessions";
    const ID_COLUMN: &'static str = "id";
    const DEFAULT_ORDER: &'static str = "created_at DESC, id DESC";

    fn pool(&self) -> &SqlitePool {
        self.pool
    }
}

impl<'a> SessionRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a session for a user with a fresh opaque token
    pub async fn create(&self, user_id: i64, expires_at: NaiveDateTime) -> Result<Session> {
        let token = Uuid::new_v4().to_string();

        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (user_id, token, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, token, expires_at, created_at
            "#,
        )
        .bind(user_id)
        .bind(&token)
        .bind(expires_at)
        .fetch_one(self.pool)
        .await
        .map_err(|e| translate_constraint(e, "Session references a missing user"))?;

        Ok(session)
    }

    /// Looks up a session by token, ignoring expired ones
    pub async fn find_valid(&self, token: &str, now: NaiveDateTime) -> Result<Option<Session>> {
        let sql = format!(
            "{} WHERE token = $1 AND expires_at > $2",
            Self::SELECT_ENTITY
        );
        let session = sqlx::query_as::<_, Session>(&sql)
            .bind(token)
            .bind(now)
            .fetch_optional(self.pool)
            .await?;

        Ok(session)
    }

    pub async fn delete_expired(&self, now: NaiveDateTime) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

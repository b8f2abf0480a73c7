use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{MagicLink, MagicLinkSummary};
use crate::repository::base::{Repository, translate_constraint};

pub struct MagicLinkRepository<'a> {
    pool: &'a SqlitePool,
}

impl Repository for MagicLinkRepository<'_> {
    type Entity = MagicLink;
    type Summary = MagicLinkSummary;

    const TABLE: &'static str = "magic_links";
    const SELECT_ENTITY: &'static str = "\
        SELECT id, user_id, token, expires_at, used_at, created_at \
        FROM magic_links";
    const SELECT_SUMMARY: &'static str =
        "SELECT id, user_id, expires_at, used_at FROM magic_links";
    const ID_COLUMN: &'static str = "id";
    const DEFAULT_ORDER: &'static str = "created_at DESC, id DESC";

    fn pool(&self) -> &SqlitePool {
        self.pool
    }
}

impl<'a> MagicLinkRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Issues a single-use login link for a user
    pub async fn issue(&self, user_id: i64, expires_at: NaiveDateTime) -> Result<MagicLink> {
        let token = Uuid::new_v4().to_string();

        let link = sqlx::query_as::<_, MagicLink>(
            r#"
            INSERT INTO magic_links (user_id, token, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, token, expires_at, used_at, created_at
            "#,
        )
        .bind(user_id)
        .bind(&token)
        .bind(expires_at)
        .fetch_one(self.pool)
        .await
        .map_err(|e| translate_constraint(e, "Magic link references a missing user"))?;

        Ok(link)
    }

    /// Redeems a link: marks it used and returns it, or None if the token
    /// is unknown, expired, or already spent. The claim is a single UPDATE
    /// so concurrent redemptions cannot both succeed.
    pub async fn consume(&self, token: &str, now: NaiveDateTime) -> Result<Option<MagicLink>> {
        let link = sqlx::query_as::<_, MagicLink>(
            r#"
            UPDATE magic_links
            SET used_at = $2
            WHERE token = $1 AND used_at IS NULL AND expires_at > $2
            RETURNING id, user_id, token, expires_at, used_at, created_at
            "#,
        )
        .bind(token)
        .bind(now)
        .fetch_optional(self.pool)
        .await?;

        Ok(link)
    }

    pub async fn delete_expired(&self, now: NaiveDateTime) -> Result<u64> {
        let result = sqlx::query("DELETE FROM magic_links WHERE expires_at <= $1")
            .bind(now)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

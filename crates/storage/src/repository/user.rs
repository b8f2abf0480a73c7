use sqlx::SqlitePool;

use crate::dto::{CreateUserRequest, UpdateUserRequest};
use crate::error::Result;
use crate::models::{User, UserSummary};
use crate::repository::base::{Repository, translate_constraint};

pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl Repository for UserRepository<'_> {
    type Entity = User;
    type Summary = UserSummary;

    const TABLE: &'static str = "users";
    const SELECT_ENTITY: &'static str = "\
        SELECT users.id, users.email, users.name, users.admin, users.role_id, \
               roles.name AS role, users.country, users.created_at, users.updated_at \
        FROM users \
        LEFT JOIN roles ON roles.id = users.role_id";
    const SELECT_SUMMARY: &'static str = "\
        SELECT users.id, users.email, users.name, users.admin, roles.name AS role \
        FROM users \
        LEFT JOIN roles ON roles.id = users.role_id";
    const ID_COLUMN: &'static str = "users.id";
    const DEFAULT_ORDER: &'static str = "users.created_at DESC, users.id DESC";

    fn pool(&self) -> &SqlitePool {
        self.pool
    }
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &CreateUserRequest) -> Result<User> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (email, name, admin, role_id, country)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&req.email)
        .bind(&req.name)
        .bind(req.admin)
        .bind(req.role_id)
        .bind(&req.country)
        .fetch_one(self.pool)
        .await
        .map_err(|e| translate_constraint(e, "Email is already taken"))?;

        self.get(id).await
    }

    pub async fn update(&self, id: i64, req: &UpdateUserRequest) -> Result<User> {
        let existing = self.get(id).await?;

        let email = req.email.as_ref().unwrap_or(&existing.email);
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let admin = req.admin.unwrap_or(existing.admin);
        let country = req.country.as_ref().or(existing.country.as_ref());

        sqlx::query(
            r#"
            UPDATE users
            SET email = $2, name = $3, admin = $4, country = $5, updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(name)
        .bind(admin)
        .bind(country)
        .execute(self.pool)
        .await
        .map_err(|e| translate_constraint(e, "Email is already taken"))?;

        self.get(id).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let sql = format!("{} WHERE users.email = $1", Self::SELECT_ENTITY);
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(self.pool)
            .await?;

        Ok(user)
    }

    /// Reassigns (or clears) a user's role
    pub async fn assign_role(&self, id: i64, role_id: Option<i64>) -> Result<User> {
        sqlx::query("UPDATE users SET role_id = $2, updated_at = CURRENT_TIMESTAMP WHERE id = $1")
            .bind(id)
            .bind(role_id)
            .execute(self.pool)
            .await
            .map_err(|e| translate_constraint(e, "Role does not exist"))?;

        self.get(id).await
    }

    /// Case-insensitive substring search over name and email
    pub async fn search(&self, query: &str) -> Result<Vec<UserSummary>> {
        let pattern = format!("%{}%", query.to_lowercase());
        let sql = format!(
            "{} WHERE LOWER(users.name) LIKE $1 OR LOWER(users.email) LIKE $1 ORDER BY {}",
            Self::SELECT_SUMMARY,
            Self::DEFAULT_ORDER
        );
        let users = sqlx::query_as::<_, UserSummary>(&sql)
            .bind(pattern)
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }
}

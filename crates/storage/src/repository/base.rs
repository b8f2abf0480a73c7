use chrono::{NaiveDate, NaiveDateTime};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

use crate::error::{Result, StorageError};

/// A typed bind value for [`Criteria`] filters.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Int(i64),
    Text(String),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Null,
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Argument::Int(value)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Text(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Text(value)
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Argument::Bool(value)
    }
}

impl From<NaiveDate> for Argument {
    fn from(value: NaiveDate) -> Self {
        Argument::Date(value)
    }
}

impl From<NaiveDateTime> for Argument {
    fn from(value: NaiveDateTime) -> Self {
        Argument::DateTime(value)
    }
}

impl Argument {
    fn push_bind(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        match self {
            Argument::Int(v) => {
                builder.push_bind(*v);
            }
            Argument::Text(v) => {
                builder.push_bind(v.clone());
            }
            Argument::Bool(v) => {
                builder.push_bind(*v);
            }
            Argument::Date(v) => {
                builder.push_bind(*v);
            }
            Argument::DateTime(v) => {
                builder.push_bind(*v);
            }
            Argument::Null => {}
        }
    }
}

/// An AND-combined column/value filter. Column names always come from
/// repository code, never from request input.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    fields: Vec<(String, Argument)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, column: &str, value: impl Into<Argument>) -> Self {
        self.fields.push((column.to_string(), value.into()));
        self
    }

    pub fn is_null(mut self, column: &str) -> Self {
        self.fields.push((column.to_string(), Argument::Null));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn push_where(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        if self.fields.is_empty() {
            return;
        }
        builder.push(" WHERE ");
        for (i, (column, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                builder.push(" AND ");
            }
            builder.push(column.as_str());
            match value {
                Argument::Null => {
                    builder.push(" IS NULL");
                }
                other => {
                    builder.push(" = ");
                    other.push_bind(builder);
                }
            }
        }
    }
}

/// Uniform read/delete surface shared by every entity repository.
///
/// The base scope constants carry the joins that flatten one level of
/// association data into the full struct, so a repository only has to
/// declare its two result shapes and its entity-specific finders. Single
/// reads always produce `Entity`, collection reads always produce
/// `Summary`; an incomplete repository is a compile error rather than a
/// runtime surprise.
#[allow(async_fn_in_trait)]
pub trait Repository {
    type Entity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin;
    type Summary: for<'r> FromRow<'r, SqliteRow> + Send + Unpin;

    /// Bare table name, used for writes and aggregates.
    const TABLE: &'static str;
    /// Base scope for single-record reads: full column list plus joins.
    const SELECT_ENTITY: &'static str;
    /// Base scope for collection reads.
    const SELECT_SUMMARY: &'static str;
    /// Qualified id column, e.g. `races.id`.
    const ID_COLUMN: &'static str;
    /// Default ordering applied to collection reads.
    const DEFAULT_ORDER: &'static str;

    fn pool(&self) -> &SqlitePool;

    async fn find(&self, id: i64) -> Result<Option<Self::Entity>> {
        let sql = format!("{} WHERE {} = $1", Self::SELECT_ENTITY, Self::ID_COLUMN);
        let record = sqlx::query_as::<_, Self::Entity>(&sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(record)
    }

    async fn get(&self, id: i64) -> Result<Self::Entity> {
        self.find(id).await?.ok_or(StorageError::NotFound)
    }

    async fn find_by(&self, criteria: &Criteria) -> Result<Option<Self::Entity>> {
        let mut builder = QueryBuilder::new(Self::SELECT_ENTITY);
        criteria.push_where(&mut builder);
        builder.push(" LIMIT 1");
        let record = builder
            .build_query_as::<Self::Entity>()
            .fetch_optional(self.pool())
            .await?;
        Ok(record)
    }

    async fn first(&self) -> Result<Option<Self::Entity>> {
        let sql = format!(
            "{} ORDER BY {} LIMIT 1",
            Self::SELECT_ENTITY,
            Self::DEFAULT_ORDER
        );
        let record = sqlx::query_as::<_, Self::Entity>(&sql)
            .fetch_optional(self.pool())
            .await?;
        Ok(record)
    }

    async fn last(&self) -> Result<Option<Self::Entity>> {
        let sql = format!(
            "{} ORDER BY {} LIMIT 1",
            Self::SELECT_ENTITY,
            reverse_order(Self::DEFAULT_ORDER)
        );
        let record = sqlx::query_as::<_, Self::Entity>(&sql)
            .fetch_optional(self.pool())
            .await?;
        Ok(record)
    }

    async fn all(&self) -> Result<Vec<Self::Summary>> {
        let sql = format!("{} ORDER BY {}", Self::SELECT_SUMMARY, Self::DEFAULT_ORDER);
        let records = sqlx::query_as::<_, Self::Summary>(&sql)
            .fetch_all(self.pool())
            .await?;
        Ok(records)
    }

    async fn matching(&self, criteria: &Criteria) -> Result<Vec<Self::Summary>> {
        let mut builder = QueryBuilder::new(Self::SELECT_SUMMARY);
        criteria.push_where(&mut builder);
        builder.push(" ORDER BY ").push(Self::DEFAULT_ORDER);
        let records = builder
            .build_query_as::<Self::Summary>()
            .fetch_all(self.pool())
            .await?;
        Ok(records)
    }

    async fn many(&self, ids: &[i64]) -> Result<Vec<Self::Summary>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut builder = QueryBuilder::new(Self::SELECT_SUMMARY);
        builder.push(" WHERE ").push(Self::ID_COLUMN).push(" IN (");
        {
            let mut separated = builder.separated(", ");
            for id in ids {
                separated.push_bind(*id);
            }
        }
        builder.push(") ORDER BY ").push(Self::DEFAULT_ORDER);
        let records = builder
            .build_query_as::<Self::Summary>()
            .fetch_all(self.pool())
            .await?;
        Ok(records)
    }

    async fn count(&self) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", Self::TABLE);
        let count = sqlx::query_scalar::<_, i64>(&sql)
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    async fn count_matching(&self, criteria: &Criteria) -> Result<i64> {
        let mut builder = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", Self::TABLE));
        criteria.push_where(&mut builder);
        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    async fn exists(&self, criteria: &Criteria) -> Result<bool> {
        Ok(self.count_matching(criteria).await? > 0)
    }

    async fn ids(&self, criteria: &Criteria) -> Result<Vec<i64>> {
        let mut builder = QueryBuilder::new(format!("SELECT id FROM {}", Self::TABLE));
        criteria.push_where(&mut builder);
        builder.push(" ORDER BY id");
        let ids = builder
            .build_query_scalar::<i64>()
            .fetch_all(self.pool())
            .await?;
        Ok(ids)
    }

    /// Returns false, not an error, when the id is absent.
    async fn delete(&self, id: i64) -> Result<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", Self::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(self.pool()).await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Flips ASC/DESC on each segment of an ORDER BY clause, so `last` mirrors
/// `first` under the repository's default ordering.
pub(crate) fn reverse_order(order: &str) -> String {
    order
        .split(',')
        .map(|segment| {
            let segment = segment.trim();
            if let Some(column) = segment.strip_suffix(" DESC") {
                format!("{column} ASC")
            } else if let Some(column) = segment.strip_suffix(" ASC") {
                format!("{column} DESC")
            } else {
                format!("{segment} DESC")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Maps storage-level constraint failures onto a failure value carrying a
/// human-readable reason; anything else propagates as a database error.
pub(crate) fn translate_constraint(err: sqlx::Error, message: &str) -> StorageError {
    match &err {
        sqlx::Error::Database(db)
            if matches!(
                db.code().as_deref(),
                Some("2067") | Some("1555") | Some("787") | Some("275")
            ) =>
        {
            tracing::warn!(detail = %db.message(), "constraint rejected write: {message}");
            StorageError::ConstraintViolation(message.to_string())
        }
        _ => StorageError::from(err),
    }
}

use sqlx::SqlitePool;

use crate::dto::{CreateReportRequest, UpdateReportRequest};
use crate::error::{Result, StorageError};
use crate::models::{Report, ReportStatus, ReportSummary};
use crate::repository::base::{Repository, translate_constraint};

pub struct ReportRepository<'a> {
    pool: &'a SqlitePool,
}

impl Repository for ReportRepository<'_> {
    type Entity = Report;
    type Summary = ReportSummary;

    const TABLE: &'static str = "reports";
    const SELECT_ENTITY: &'static str = "\
        SELECT reports.id, reports.user_id, users.name AS user_name, \
               reports.incident_id, reports.status, reports.title, reports.body, \
               reports.created_at, reports.updated_at \
        FROM reports \
        JOIN users ON users.id = reports.user_id";
    const SELECT_SUMMARY: &'static str = "\
        SELECT reports.id, reports.user_id, reports.status, reports.title, \
               reports.created_at \
        FROM reports";
    const ID_COLUMN: &'static str = "reports.id";
    const DEFAULT_ORDER: &'static str = "reports.created_at DESC, reports.id DESC";

    fn pool(&self) -> &SqlitePool {
        self.pool
    }
}

impl<'a> ReportRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &CreateReportRequest) -> Result<Report> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO reports (user_id, incident_id, title, body)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(req.user_id)
        .bind(req.incident_id)
        .bind(&req.title)
        .bind(&req.body)
        .fetch_one(self.pool)
        .await
        .map_err(|e| translate_constraint(e, "Report references a missing user or incident"))?;

        self.get(id).await
    }

    pub async fn update(&self, id: i64, req: &UpdateReportRequest) -> Result<Report> {
        let existing = self.get(id).await?;

        let title = req.title.as_ref().unwrap_or(&existing.title);
        let body = req.body.as_ref().or(existing.body.as_ref());

        sqlx::query(
            r#"
            UPDATE reports
            SET title = $2, body = $3, updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(body)
        .execute(self.pool)
        .await?;

        self.get(id).await
    }

    /// Reports owned by one user, newest first
    pub async fn for_user(&self, user_id: i64) -> Result<Vec<ReportSummary>> {
        let sql = format!(
            "{} WHERE reports.user_id = $1 ORDER BY {}",
            Self::SELECT_SUMMARY,
            Self::DEFAULT_ORDER
        );
        let reports = sqlx::query_as::<_, ReportSummary>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(reports)
    }

    pub async fn submit(&self, id: i64) -> Result<Report> {
        self.transition(id, ReportStatus::Submitted).await
    }

    pub async fn finalize(&self, id: i64) -> Result<Report> {
        self.transition(id, ReportStatus::Finalized).await
    }

    async fn transition(&self, id: i64, to: ReportStatus) -> Result<Report> {
        let report = self.get(id).await?;

        if !report.status.can_transition_to(to) {
            return Err(StorageError::ConstraintViolation(format!(
                "Cannot move report from {} to {}",
                report.status.as_str(),
                to.as_str()
            )));
        }

        sqlx::query("UPDATE reports SET status = $2, updated_at = CURRENT_TIMESTAMP WHERE id = $1")
            .bind(id)
            .bind(to)
            .execute(self.pool)
            .await?;

        self.get(id).await
    }
}

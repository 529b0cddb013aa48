use crate::models::{ReportSchedule, ReportTemplate};
use sqlx::{PgPool, Result};
use uuid::Uuid;

pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_templates(&self) -> Result<Vec<ReportTemplate>> {
        sqlx::query_as::<_, ReportTemplate>("SELECT * FROM report_templates ORDER BY name")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_template(&self, id: Uuid) -> Result<Option<ReportTemplate>> {
        sqlx::query_as::<_, ReportTemplate>("SELECT * FROM report_templates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create_template(
        &self,
        name: &str,
        description: Option<&str>,
        body: &serde_json::Value,
    ) -> Result<ReportTemplate> {
        sqlx::query_as::<_, ReportTemplate>(
            r#"
            INSERT INTO report_templates (name, description, body)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(body)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_template(
        &self,
        id: Uuid,
        name: &str,
        description: Option<&str>,
        body: &serde_json::Value,
    ) -> Result<Option<ReportTemplate>> {
        sqlx::query_as::<_, ReportTemplate>(
            r#"
            UPDATE report_templates
            SET name = $1, description = $2, body = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(body)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete_template(&self, id: Uuid) -> Result<bool> {
        let res = sqlx::query("DELETE FROM report_templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn list_schedules(&self, template_id: Uuid) -> Result<Vec<ReportSchedule>> {
        sqlx::query_as::<_, ReportSchedule>(
            "SELECT * FROM report_schedules WHERE template_id = $1 ORDER BY created_at",
        )
        .bind(template_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create_schedule(
        &self,
        template_id: Uuid,
        cron_expr: &str,
        recipients: &serde_json::Value,
        enabled: bool,
    ) -> Result<ReportSchedule> {
        sqlx::query_as::<_, ReportSchedule>(
            r#"
            INSERT INTO report_schedules (template_id, cron_expr, recipients, enabled)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(template_id)
        .bind(cron_expr)
        .bind(recipients)
        .bind(enabled)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn set_schedule_enabled(&self, id: Uuid, enabled: bool) -> Result<Option<ReportSchedule>> {
        sqlx::query_as::<_, ReportSchedule>(
            "UPDATE report_schedules SET enabled = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
        )
        .bind(enabled)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete_schedule(&self, id: Uuid) -> Result<bool> {
        let res = sqlx::query("DELETE FROM report_schedules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

use crate::models::TreatmentPlan;
use chrono::NaiveDate;
use sqlx::{PgPool, Result};
use uuid::Uuid;

pub struct TreatmentRepository {
    pool: PgPool,
}

impl TreatmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_risk(&self, risk_id: Uuid) -> Result<Vec<TreatmentPlan>> {
        sqlx::query_as::<_, TreatmentPlan>(
            "SELECT * FROM treatment_plans WHERE risk_id = $1 ORDER BY due_date NULLS LAST",
        )
        .bind(risk_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create(
        &self,
        risk_id: Uuid,
        title: &str,
        action: &str,
        due_date: Option<NaiveDate>,
        assignee_id: Option<Uuid>,
    ) -> Result<TreatmentPlan> {
        sqlx::query_as::<_, TreatmentPlan>(
            r#"
            INSERT INTO treatment_plans (risk_id, title, action, due_date, assignee_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(risk_id)
        .bind(title)
        .bind(action)
        .bind(due_date)
        .bind(assignee_id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Option<TreatmentPlan>> {
        sqlx::query_as::<_, TreatmentPlan>(
            "UPDATE treatment_plans SET status = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let res = sqlx::query("DELETE FROM treatment_plans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

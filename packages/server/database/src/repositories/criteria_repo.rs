use crate::models::RiskCriterion;
use sqlx::{PgPool, Result};
use uuid::Uuid;

pub struct CriteriaRepository {
    pool: PgPool,
}

impl CriteriaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, kind: Option<&str>) -> Result<Vec<RiskCriterion>> {
        sqlx::query_as::<_, RiskCriterion>(
            r#"
            SELECT * FROM risk_criteria
            WHERE ($1::text IS NULL OR kind = $1)
            ORDER BY kind, scale
            "#,
        )
        .bind(kind)
        .fetch_all(&self.pool)
        .await
    }

    /// (kind, scale) is unique, so redefining a step replaces its label.
    pub async fn upsert(
        &self,
        kind: &str,
        scale: i32,
        label: &str,
        description: Option<&str>,
    ) -> Result<RiskCriterion> {
        sqlx::query_as::<_, RiskCriterion>(
            r#"
            INSERT INTO risk_criteria (kind, scale, label, description)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (kind, scale) DO UPDATE SET
                label = EXCLUDED.label,
                description = EXCLUDED.description,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(kind)
        .bind(scale)
        .bind(label)
        .bind(description)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let res = sqlx::query("DELETE FROM risk_criteria WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

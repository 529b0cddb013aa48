use crate::models::RiskAssessment;
use rust_decimal::Decimal;
use sqlx::{PgPool, Result};
use uuid::Uuid;

/// Everything needed to write one assessment row. `exposure` and `level` come
/// from the scoring crate; this layer never derives them.
pub struct AssessmentRecord<'a> {
    pub risk_id: Uuid,
    pub variant: &'a str,
    pub impact_value: Decimal,
    pub impact_scale: i32,
    pub probability_value: Decimal,
    pub probability_scale: i32,
    pub exposure: i32,
    pub level: &'a str,
    pub notes: Option<&'a str>,
    pub assessed_by: Uuid,
}

pub struct AssessmentRepository {
    pool: PgPool,
}

impl AssessmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Wholesale replace of the (risk, variant) row. A single statement, so
    /// two concurrent submissions for the same key serialize in Postgres and
    /// the last writer wins with a fully consistent row.
    pub async fn upsert(&self, record: AssessmentRecord<'_>) -> Result<RiskAssessment> {
        sqlx::query_as::<_, RiskAssessment>(
            r#"
            INSERT INTO risk_assessments
                (risk_id, variant, impact_value, impact_scale,
                 probability_value, probability_scale, exposure, level,
                 notes, assessed_by, assessed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW())
            ON CONFLICT (risk_id, variant) DO UPDATE SET
                impact_value = EXCLUDED.impact_value,
                impact_scale = EXCLUDED.impact_scale,
                probability_value = EXCLUDED.probability_value,
                probability_scale = EXCLUDED.probability_scale,
                exposure = EXCLUDED.exposure,
                level = EXCLUDED.level,
                notes = EXCLUDED.notes,
                assessed_by = EXCLUDED.assessed_by,
                assessed_at = NOW()
            RETURNING *
            "#,
        )
        .bind(record.risk_id)
        .bind(record.variant)
        .bind(record.impact_value)
        .bind(record.impact_scale)
        .bind(record.probability_value)
        .bind(record.probability_scale)
        .bind(record.exposure)
        .bind(record.level)
        .bind(record.notes)
        .bind(record.assessed_by)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list_for_risk(&self, risk_id: Uuid) -> Result<Vec<RiskAssessment>> {
        sqlx::query_as::<_, RiskAssessment>(
            "SELECT * FROM risk_assessments WHERE risk_id = $1 ORDER BY variant",
        )
        .bind(risk_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find(&self, risk_id: Uuid, variant: &str) -> Result<Option<RiskAssessment>> {
        sqlx::query_as::<_, RiskAssessment>(
            "SELECT * FROM risk_assessments WHERE risk_id = $1 AND variant = $2",
        )
        .bind(risk_id)
        .bind(variant)
        .fetch_optional(&self.pool)
        .await
    }

    /// Per-cell counts of stored assessments of one variant, keyed by the
    /// (impact_scale, probability_scale) pair. Feeds the heatmap aggregation.
    pub async fn cell_counts(&self, variant: &str) -> Result<Vec<(i32, i32, i64)>> {
        let rows: Vec<(i32, i32, i64)> = sqlx::query_as(
            r#"
            SELECT impact_scale, probability_scale, COUNT(*)
            FROM risk_assessments
            WHERE variant = $1
            GROUP BY impact_scale, probability_scale
            "#,
        )
        .bind(variant)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

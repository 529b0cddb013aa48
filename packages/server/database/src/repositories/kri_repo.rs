use crate::models::Kri;
use rust_decimal::Decimal;
use sqlx::{PgPool, Result};
use uuid::Uuid;

pub struct KriRepository {
    pool: PgPool,
}

impl KriRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_risk(&self, risk_id: Uuid) -> Result<Vec<Kri>> {
        sqlx::query_as::<_, Kri>("SELECT * FROM kris WHERE risk_id = $1 ORDER BY name")
            .bind(risk_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Kri>> {
        sqlx::query_as::<_, Kri>("SELECT * FROM kris WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(
        &self,
        risk_id: Uuid,
        name: &str,
        metric: &str,
        threshold: Decimal,
        direction: &str,
        current_value: Option<Decimal>,
    ) -> Result<Kri> {
        sqlx::query_as::<_, Kri>(
            r#"
            INSERT INTO kris (risk_id, name, metric, threshold, direction, current_value)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(risk_id)
        .bind(name)
        .bind(metric)
        .bind(threshold)
        .bind(direction)
        .bind(current_value)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_value(&self, id: Uuid, current_value: Decimal) -> Result<Option<Kri>> {
        sqlx::query_as::<_, Kri>(
            "UPDATE kris SET current_value = $1, updated_at = NOW() WHERE id = $2 RETURNING *",
        )
        .bind(current_value)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let res = sqlx::query("DELETE FROM kris WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

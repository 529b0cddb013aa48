use crate::models::Risk;
use sqlx::{PgPool, Result};
use uuid::Uuid;

pub struct RiskRepository {
    pool: PgPool,
}

impl RiskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, unit_id: Option<Uuid>, category_id: Option<Uuid>) -> Result<Vec<Risk>> {
        sqlx::query_as::<_, Risk>(
            r#"
            SELECT * FROM risks
            WHERE ($1::uuid IS NULL OR unit_id = $1)
              AND ($2::uuid IS NULL OR category_id = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(unit_id)
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Risk>> {
        sqlx::query_as::<_, Risk>("SELECT * FROM risks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(
        &self,
        title: &str,
        description: Option<&str>,
        category_id: Option<Uuid>,
        unit_id: Option<Uuid>,
        owner_id: Uuid,
    ) -> Result<Risk> {
        sqlx::query_as::<_, Risk>(
            r#"
            INSERT INTO risks (title, description, category_id, unit_id, owner_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(category_id)
        .bind(unit_id)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        title: &str,
        description: Option<&str>,
        category_id: Option<Uuid>,
        unit_id: Option<Uuid>,
        status: &str,
    ) -> Result<Option<Risk>> {
        sqlx::query_as::<_, Risk>(
            r#"
            UPDATE risks
            SET title = $1, description = $2, category_id = $3, unit_id = $4,
                status = $5, updated_at = NOW()
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(category_id)
        .bind(unit_id)
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let res = sqlx::query("DELETE FROM risks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

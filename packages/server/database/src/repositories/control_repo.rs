use crate::models::Control;
use sqlx::{PgPool, Result};
use uuid::Uuid;

pub struct ControlRepository {
    pool: PgPool,
}

impl ControlRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_risk(&self, risk_id: Uuid) -> Result<Vec<Control>> {
        sqlx::query_as::<_, Control>("SELECT * FROM controls WHERE risk_id = $1 ORDER BY name")
            .bind(risk_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create(
        &self,
        risk_id: Uuid,
        name: &str,
        description: Option<&str>,
        effectiveness: &str,
        owner_id: Uuid,
    ) -> Result<Control> {
        sqlx::query_as::<_, Control>(
            r#"
            INSERT INTO controls (risk_id, name, description, effectiveness, owner_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(risk_id)
        .bind(name)
        .bind(description)
        .bind(effectiveness)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        description: Option<&str>,
        effectiveness: &str,
    ) -> Result<Option<Control>> {
        sqlx::query_as::<_, Control>(
            r#"
            UPDATE controls
            SET name = $1, description = $2, effectiveness = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(effectiveness)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let res = sqlx::query("DELETE FROM controls WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

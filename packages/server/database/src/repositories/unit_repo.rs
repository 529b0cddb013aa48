use crate::models::BusinessUnit;
use sqlx::{PgPool, Result};
use uuid::Uuid;

pub struct UnitRepository {
    pool: PgPool,
}

impl UnitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<BusinessUnit>> {
        sqlx::query_as::<_, BusinessUnit>("SELECT * FROM business_units ORDER BY name")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<BusinessUnit>> {
        sqlx::query_as::<_, BusinessUnit>("SELECT * FROM business_units WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(&self, name: &str, description: Option<&str>) -> Result<BusinessUnit> {
        sqlx::query_as::<_, BusinessUnit>(
            r#"
            INSERT INTO business_units (name, description)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        description: Option<&str>,
    ) -> Result<Option<BusinessUnit>> {
        sqlx::query_as::<_, BusinessUnit>(
            r#"
            UPDATE business_units
            SET name = $1, description = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let res = sqlx::query("DELETE FROM business_units WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

use crate::models::{RiskCategory, RiskTaxonomy};
use sqlx::{PgPool, Result};
use uuid::Uuid;

pub struct TaxonomyRepository {
    pool: PgPool,
}

impl TaxonomyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<RiskTaxonomy>> {
        sqlx::query_as::<_, RiskTaxonomy>("SELECT * FROM risk_taxonomies ORDER BY name")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RiskTaxonomy>> {
        sqlx::query_as::<_, RiskTaxonomy>("SELECT * FROM risk_taxonomies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(&self, name: &str, description: Option<&str>) -> Result<RiskTaxonomy> {
        sqlx::query_as::<_, RiskTaxonomy>(
            r#"
            INSERT INTO risk_taxonomies (name, description)
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
    ) -> Result<Option<RiskTaxonomy>> {
        sqlx::query_as::<_, RiskTaxonomy>(
            r#"
            UPDATE risk_taxonomies
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
        let res = sqlx::query("DELETE FROM risk_taxonomies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn list_categories(&self, taxonomy_id: Uuid) -> Result<Vec<RiskCategory>> {
        sqlx::query_as::<_, RiskCategory>(
            "SELECT * FROM risk_categories WHERE taxonomy_id = $1 ORDER BY name",
        )
        .bind(taxonomy_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create_category(
        &self,
        taxonomy_id: Uuid,
        name: &str,
        description: Option<&str>,
    ) -> Result<RiskCategory> {
        sqlx::query_as::<_, RiskCategory>(
            r#"
            INSERT INTO risk_categories (taxonomy_id, name, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(taxonomy_id)
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn delete_category(&self, id: Uuid) -> Result<bool> {
        let res = sqlx::query("DELETE FROM risk_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

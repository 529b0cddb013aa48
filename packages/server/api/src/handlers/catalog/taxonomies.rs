use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::handlers::ServiceError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use database::models::{RiskCategory, RiskTaxonomy};
use database::repositories::TaxonomyRepository;
use shared::dto::{CategoryPayload, TaxonomyPayload};

pub async fn list_taxonomies(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<RiskTaxonomy>>, ServiceError> {
    let repo = TaxonomyRepository::new(state.db.pool.clone());
    Ok(Json(repo.list().await?))
}

pub async fn create_taxonomy(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<TaxonomyPayload>,
) -> Result<Json<RiskTaxonomy>, ServiceError> {
    user.require_manager()?;
    body.validate()?;

    let repo = TaxonomyRepository::new(state.db.pool.clone());
    let taxonomy = repo.create(&body.name, body.description.as_deref()).await?;
    Ok(Json(taxonomy))
}

pub async fn update_taxonomy(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<TaxonomyPayload>,
) -> Result<Json<RiskTaxonomy>, ServiceError> {
    user.require_manager()?;
    body.validate()?;

    let repo = TaxonomyRepository::new(state.db.pool.clone());
    let taxonomy = repo
        .update(id, &body.name, body.description.as_deref())
        .await?
        .ok_or_else(|| ServiceError::NotFound("Taxonomy not found".to_string()))?;
    Ok(Json(taxonomy))
}

pub async fn delete_taxonomy(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    user.require_manager()?;

    let repo = TaxonomyRepository::new(state.db.pool.clone());
    if !repo.delete(id).await? {
        return Err(ServiceError::NotFound("Taxonomy not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

pub async fn list_categories(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(taxonomy_id): Path<Uuid>,
) -> Result<Json<Vec<RiskCategory>>, ServiceError> {
    let repo = TaxonomyRepository::new(state.db.pool.clone());
    repo.find_by_id(taxonomy_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Taxonomy not found".to_string()))?;
    Ok(Json(repo.list_categories(taxonomy_id).await?))
}

pub async fn create_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(taxonomy_id): Path<Uuid>,
    Json(body): Json<CategoryPayload>,
) -> Result<Json<RiskCategory>, ServiceError> {
    user.require_manager()?;
    body.validate()?;

    let repo = TaxonomyRepository::new(state.db.pool.clone());
    repo.find_by_id(taxonomy_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Taxonomy not found".to_string()))?;

    let category = repo
        .create_category(taxonomy_id, &body.name, body.description.as_deref())
        .await?;
    Ok(Json(category))
}

pub async fn delete_category(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    user.require_manager()?;

    let repo = TaxonomyRepository::new(state.db.pool.clone());
    if !repo.delete_category(id).await? {
        return Err(ServiceError::NotFound("Category not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

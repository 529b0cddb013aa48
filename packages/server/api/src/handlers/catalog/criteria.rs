use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::handlers::ServiceError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use database::models::RiskCriterion;
use database::repositories::CriteriaRepository;
use shared::dto::CriterionPayload;

#[derive(Deserialize)]
pub struct CriteriaFilter {
    pub kind: Option<String>,
}

pub async fn list_criteria(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(filter): Query<CriteriaFilter>,
) -> Result<Json<Vec<RiskCriterion>>, ServiceError> {
    let repo = CriteriaRepository::new(state.db.pool.clone());
    Ok(Json(repo.list(filter.kind.as_deref()).await?))
}

/// POST is an upsert: redefining an existing (kind, scale) step replaces its
/// label and description.
pub async fn upsert_criterion(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<CriterionPayload>,
) -> Result<Json<RiskCriterion>, ServiceError> {
    user.require_manager()?;
    body.validate()?;

    let repo = CriteriaRepository::new(state.db.pool.clone());
    let criterion = repo
        .upsert(&body.kind, body.scale, &body.label, body.description.as_deref())
        .await?;
    Ok(Json(criterion))
}

pub async fn delete_criterion(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    user.require_manager()?;

    let repo = CriteriaRepository::new(state.db.pool.clone());
    if !repo.delete(id).await? {
        return Err(ServiceError::NotFound("Criterion not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

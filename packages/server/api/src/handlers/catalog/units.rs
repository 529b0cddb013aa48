use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::handlers::ServiceError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use database::models::BusinessUnit;
use database::repositories::UnitRepository;
use shared::dto::UnitPayload;

pub async fn list_units(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<BusinessUnit>>, ServiceError> {
    let repo = UnitRepository::new(state.db.pool.clone());
    Ok(Json(repo.list().await?))
}

pub async fn create_unit(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<UnitPayload>,
) -> Result<Json<BusinessUnit>, ServiceError> {
    user.require_manager()?;
    body.validate()?;

    let repo = UnitRepository::new(state.db.pool.clone());
    let unit = repo.create(&body.name, body.description.as_deref()).await?;
    Ok(Json(unit))
}

pub async fn update_unit(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<UnitPayload>,
) -> Result<Json<BusinessUnit>, ServiceError> {
    user.require_manager()?;
    body.validate()?;

    let repo = UnitRepository::new(state.db.pool.clone());
    let unit = repo
        .update(id, &body.name, body.description.as_deref())
        .await?
        .ok_or_else(|| ServiceError::NotFound("Business unit not found".to_string()))?;
    Ok(Json(unit))
}

pub async fn delete_unit(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    user.require_manager()?;

    let repo = UnitRepository::new(state.db.pool.clone());
    if !repo.delete(id).await? {
        return Err(ServiceError::NotFound("Business unit not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

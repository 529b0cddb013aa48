use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::handlers::ServiceError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use database::models::Control;
use database::repositories::{ControlRepository, RiskRepository};
use shared::dto::ControlPayload;

pub async fn list_controls(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(risk_id): Path<Uuid>,
) -> Result<Json<Vec<Control>>, ServiceError> {
    ensure_risk_exists(&state, risk_id).await?;
    let repo = ControlRepository::new(state.db.pool.clone());
    Ok(Json(repo.list_for_risk(risk_id).await?))
}

pub async fn create_control(
    State(state): State<AppState>,
    user: AuthUser,
    Path(risk_id): Path<Uuid>,
    Json(body): Json<ControlPayload>,
) -> Result<Json<Control>, ServiceError> {
    body.validate()?;
    ensure_risk_exists(&state, risk_id).await?;

    let repo = ControlRepository::new(state.db.pool.clone());
    let control = repo
        .create(
            risk_id,
            &body.name,
            body.description.as_deref(),
            &body.effectiveness,
            user.0.id,
        )
        .await?;
    Ok(Json(control))
}

pub async fn update_control(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ControlPayload>,
) -> Result<Json<Control>, ServiceError> {
    body.validate()?;

    let repo = ControlRepository::new(state.db.pool.clone());
    let control = repo
        .update(id, &body.name, body.description.as_deref(), &body.effectiveness)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Control not found".to_string()))?;
    Ok(Json(control))
}

pub async fn delete_control(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let repo = ControlRepository::new(state.db.pool.clone());
    if !repo.delete(id).await? {
        return Err(ServiceError::NotFound("Control not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

async fn ensure_risk_exists(state: &AppState, risk_id: Uuid) -> Result<(), ServiceError> {
    RiskRepository::new(state.db.pool.clone())
        .find_by_id(risk_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Risk not found".to_string()))?;
    Ok(())
}

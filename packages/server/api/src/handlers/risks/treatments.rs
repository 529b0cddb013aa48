use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::handlers::ServiceError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use database::models::TreatmentPlan;
use database::repositories::{RiskRepository, TreatmentRepository};
use shared::dto::TreatmentPayload;

pub async fn list_treatments(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(risk_id): Path<Uuid>,
) -> Result<Json<Vec<TreatmentPlan>>, ServiceError> {
    RiskRepository::new(state.db.pool.clone())
        .find_by_id(risk_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Risk not found".to_string()))?;

    let repo = TreatmentRepository::new(state.db.pool.clone());
    Ok(Json(repo.list_for_risk(risk_id).await?))
}

pub async fn create_treatment(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(risk_id): Path<Uuid>,
    Json(body): Json<TreatmentPayload>,
) -> Result<Json<TreatmentPlan>, ServiceError> {
    body.validate()?;

    RiskRepository::new(state.db.pool.clone())
        .find_by_id(risk_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Risk not found".to_string()))?;

    let repo = TreatmentRepository::new(state.db.pool.clone());
    let plan = repo
        .create(
            risk_id,
            &body.title,
            &body.action,
            body.due_date,
            body.assignee_id,
        )
        .await?;
    Ok(Json(plan))
}

#[derive(Deserialize)]
pub struct TreatmentStatusUpdate {
    pub status: String,
}

pub async fn update_treatment_status(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<TreatmentStatusUpdate>,
) -> Result<Json<TreatmentPlan>, ServiceError> {
    if !matches!(body.status.as_str(), "PLANNED" | "IN_PROGRESS" | "DONE") {
        return Err(ServiceError::BadRequest(format!(
            "Unknown treatment status '{}'",
            body.status
        )));
    }

    let repo = TreatmentRepository::new(state.db.pool.clone());
    let plan = repo
        .update_status(id, &body.status)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Treatment plan not found".to_string()))?;
    Ok(Json(plan))
}

pub async fn delete_treatment(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let repo = TreatmentRepository::new(state.db.pool.clone());
    if !repo.delete(id).await? {
        return Err(ServiceError::NotFound("Treatment plan not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

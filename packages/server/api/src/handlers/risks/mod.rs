use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

pub mod assessments;
pub mod controls;
pub mod kris;
pub mod treatments;

use crate::handlers::ServiceError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use database::models::Risk;
use database::repositories::RiskRepository;
use shared::dto::RiskPayload;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/risks", get(list_risks).post(create_risk))
        .route(
            "/v1/risks/:id",
            get(get_risk).put(update_risk).delete(delete_risk),
        )
        .route(
            "/v1/risks/:id/assessments",
            put(assessments::upsert_assessment).get(assessments::list_assessments),
        )
        .route(
            "/v1/risks/:id/controls",
            get(controls::list_controls).post(controls::create_control),
        )
        .route("/v1/controls/:id", put(controls::update_control).delete(controls::delete_control))
        .route(
            "/v1/risks/:id/kris",
            get(kris::list_kris).post(kris::create_kri),
        )
        .route("/v1/kris/:id", put(kris::update_kri_value).delete(kris::delete_kri))
        .route(
            "/v1/risks/:id/treatments",
            get(treatments::list_treatments).post(treatments::create_treatment),
        )
        .route(
            "/v1/treatments/:id",
            put(treatments::update_treatment_status).delete(treatments::delete_treatment),
        )
}

#[derive(Deserialize)]
pub struct RiskFilter {
    pub unit_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
}

pub async fn list_risks(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(filter): Query<RiskFilter>,
) -> Result<Json<Vec<Risk>>, ServiceError> {
    let repo = RiskRepository::new(state.db.pool.clone());
    let risks = repo.list(filter.unit_id, filter.category_id).await?;
    Ok(Json(risks))
}

pub async fn get_risk(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Risk>, ServiceError> {
    let repo = RiskRepository::new(state.db.pool.clone());
    let risk = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Risk not found".to_string()))?;
    Ok(Json(risk))
}

pub async fn create_risk(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<RiskPayload>,
) -> Result<Json<Risk>, ServiceError> {
    body.validate()?;

    let repo = RiskRepository::new(state.db.pool.clone());
    let risk = repo
        .create(
            &body.title,
            body.description.as_deref(),
            body.category_id,
            body.unit_id,
            user.0.id,
        )
        .await?;

    tracing::info!("Risk '{}' created by {}", risk.title, user.0.username);
    Ok(Json(risk))
}

pub async fn update_risk(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<RiskPayload>,
) -> Result<Json<Risk>, ServiceError> {
    body.validate()?;

    let status = body.status.as_deref().unwrap_or("OPEN");
    if !matches!(status, "OPEN" | "MITIGATED" | "CLOSED") {
        return Err(ServiceError::BadRequest(format!(
            "Unknown risk status '{}'",
            status
        )));
    }

    let repo = RiskRepository::new(state.db.pool.clone());
    let risk = repo
        .update(
            id,
            &body.title,
            body.description.as_deref(),
            body.category_id,
            body.unit_id,
            status,
        )
        .await?
        .ok_or_else(|| ServiceError::NotFound("Risk not found".to_string()))?;
    Ok(Json(risk))
}

pub async fn delete_risk(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    user.require_manager()?;

    let repo = RiskRepository::new(state.db.pool.clone());
    if !repo.delete(id).await? {
        return Err(ServiceError::NotFound("Risk not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::handlers::ServiceError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use database::models::{ReportSchedule, ReportTemplate};
use database::repositories::ReportRepository;
use shared::dto::{ReportSchedulePayload, ReportTemplatePayload};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/report-templates",
            get(list_templates).post(create_template),
        )
        .route(
            "/v1/report-templates/:id",
            get(get_template).put(update_template).delete(delete_template),
        )
        .route(
            "/v1/report-templates/:id/schedules",
            get(list_schedules).post(create_schedule),
        )
        .route(
            "/v1/report-schedules/:id",
            put(toggle_schedule).delete(delete_schedule),
        )
}

pub async fn list_templates(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<ReportTemplate>>, ServiceError> {
    let repo = ReportRepository::new(state.db.pool.clone());
    Ok(Json(repo.list_templates().await?))
}

pub async fn get_template(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ReportTemplate>, ServiceError> {
    let repo = ReportRepository::new(state.db.pool.clone());
    let template = repo
        .find_template(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Report template not found".to_string()))?;
    Ok(Json(template))
}

pub async fn create_template(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<ReportTemplatePayload>,
) -> Result<Json<ReportTemplate>, ServiceError> {
    user.require_manager()?;
    body.validate()?;

    let repo = ReportRepository::new(state.db.pool.clone());
    let template = repo
        .create_template(&body.name, body.description.as_deref(), &body.body)
        .await?;
    Ok(Json(template))
}

pub async fn update_template(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ReportTemplatePayload>,
) -> Result<Json<ReportTemplate>, ServiceError> {
    user.require_manager()?;
    body.validate()?;

    let repo = ReportRepository::new(state.db.pool.clone());
    let template = repo
        .update_template(id, &body.name, body.description.as_deref(), &body.body)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Report template not found".to_string()))?;
    Ok(Json(template))
}

pub async fn delete_template(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    user.require_manager()?;

    let repo = ReportRepository::new(state.db.pool.clone());
    if !repo.delete_template(id).await? {
        return Err(ServiceError::NotFound("Report template not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

pub async fn list_schedules(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(template_id): Path<Uuid>,
) -> Result<Json<Vec<ReportSchedule>>, ServiceError> {
    let repo = ReportRepository::new(state.db.pool.clone());
    repo.find_template(template_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Report template not found".to_string()))?;
    Ok(Json(repo.list_schedules(template_id).await?))
}

/// The cron expression is stored as-is; this service never evaluates it. The
/// delivery worker owns scheduling.
pub async fn create_schedule(
    State(state): State<AppState>,
    user: AuthUser,
    Path(template_id): Path<Uuid>,
    Json(body): Json<ReportSchedulePayload>,
) -> Result<Json<ReportSchedule>, ServiceError> {
    user.require_manager()?;
    body.validate()?;

    let repo = ReportRepository::new(state.db.pool.clone());
    repo.find_template(template_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Report template not found".to_string()))?;

    let recipients = serde_json::to_value(&body.recipients)
        .map_err(|e| ServiceError::BadRequest(format!("Invalid recipients: {}", e)))?;

    let schedule = repo
        .create_schedule(template_id, &body.cron_expr, &recipients, body.enabled)
        .await?;
    Ok(Json(schedule))
}

#[derive(Deserialize)]
pub struct ScheduleToggle {
    pub enabled: bool,
}

pub async fn toggle_schedule(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<ScheduleToggle>,
) -> Result<Json<ReportSchedule>, ServiceError> {
    user.require_manager()?;

    let repo = ReportRepository::new(state.db.pool.clone());
    let schedule = repo
        .set_schedule_enabled(id, body.enabled)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Report schedule not found".to_string()))?;
    Ok(Json(schedule))
}

pub async fn delete_schedule(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    user.require_manager()?;

    let repo = ReportRepository::new(state.db.pool.clone());
    if !repo.delete_schedule(id).await? {
        return Err(ServiceError::NotFound("Report schedule not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::handlers::ServiceError;
use crate::middleware::auth::AuthUser;
use crate::services::assessment_service::AssessmentService;
use crate::state::AppState;
use database::models::RiskAssessment;
use shared::dto::AssessmentPayload;

/// PUT /v1/risks/:id/assessments
///
/// Upsert semantics: at most one INHERENT and one RESIDUAL row per risk, the
/// submitted payload replaces the previous one wholesale.
pub async fn upsert_assessment(
    State(state): State<AppState>,
    user: AuthUser,
    Path(risk_id): Path<Uuid>,
    Json(body): Json<AssessmentPayload>,
) -> Result<Json<RiskAssessment>, ServiceError> {
    let service = AssessmentService::new(state.db.clone());
    let stored = service.submit(risk_id, body, user.0.id).await?;
    Ok(Json(stored))
}

pub async fn list_assessments(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(risk_id): Path<Uuid>,
) -> Result<Json<Vec<RiskAssessment>>, ServiceError> {
    let service = AssessmentService::new(state.db.clone());
    let rows = service.list(risk_id).await?;
    Ok(Json(rows))
}

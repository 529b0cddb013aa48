use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::handlers::ServiceError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use database::models::Kri;
use database::repositories::{KriRepository, RiskRepository};
use shared::dto::KriPayload;

/// A KRI plus its derived breach status. The status is computed on read, not
/// stored.
#[derive(Serialize)]
pub struct KriView {
    #[serde(flatten)]
    pub kri: Kri,
    pub breached: bool,
}

impl From<Kri> for KriView {
    fn from(kri: Kri) -> Self {
        let breached = kri.is_breached();
        Self { kri, breached }
    }
}

pub async fn list_kris(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(risk_id): Path<Uuid>,
) -> Result<Json<Vec<KriView>>, ServiceError> {
    RiskRepository::new(state.db.pool.clone())
        .find_by_id(risk_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Risk not found".to_string()))?;

    let repo = KriRepository::new(state.db.pool.clone());
    let kris = repo.list_for_risk(risk_id).await?;
    Ok(Json(kris.into_iter().map(KriView::from).collect()))
}

pub async fn create_kri(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(risk_id): Path<Uuid>,
    Json(body): Json<KriPayload>,
) -> Result<Json<KriView>, ServiceError> {
    body.validate()?;

    RiskRepository::new(state.db.pool.clone())
        .find_by_id(risk_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Risk not found".to_string()))?;

    let repo = KriRepository::new(state.db.pool.clone());
    let kri = repo
        .create(
            risk_id,
            &body.name,
            &body.metric,
            body.threshold,
            &body.direction,
            body.current_value,
        )
        .await?;
    Ok(Json(kri.into()))
}

#[derive(Deserialize)]
pub struct KriValueUpdate {
    pub current_value: Decimal,
}

pub async fn update_kri_value(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<KriValueUpdate>,
) -> Result<Json<KriView>, ServiceError> {
    let repo = KriRepository::new(state.db.pool.clone());
    let kri = repo
        .update_value(id, body.current_value)
        .await?
        .ok_or_else(|| ServiceError::NotFound("KRI not found".to_string()))?;

    if kri.is_breached() {
        tracing::warn!("KRI '{}' breached its threshold", kri.name);
    }

    Ok(Json(kri.into()))
}

pub async fn delete_kri(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let repo = KriRepository::new(state.db.pool.clone());
    if !repo.delete(id).await? {
        return Err(ServiceError::NotFound("KRI not found".to_string()));
    }
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}

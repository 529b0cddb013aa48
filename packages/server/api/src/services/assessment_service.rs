use database::models::RiskAssessment;
use database::repositories::assessment_repo::{AssessmentRecord, AssessmentRepository};
use database::repositories::RiskRepository;
use database::Database;
use std::sync::Arc;
use uuid::Uuid;

use crate::handlers::ServiceError;
use shared::dto::AssessmentPayload;

/// Orchestrates one assessment submission: validate, score, upsert. This is
/// the only path that writes exposure/level, and it always goes through
/// `scoring::assess`.
pub struct AssessmentService {
    risk_repo: RiskRepository,
    assessment_repo: AssessmentRepository,
}

impl AssessmentService {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            risk_repo: RiskRepository::new(db.pool.clone()),
            assessment_repo: AssessmentRepository::new(db.pool.clone()),
        }
    }

    pub async fn submit(
        &self,
        risk_id: Uuid,
        payload: AssessmentPayload,
        assessed_by: Uuid,
    ) -> Result<RiskAssessment, ServiceError> {
        // Range-check the scales before any scoring happens. The engine
        // itself would happily extrapolate an out-of-range pair.
        payload.validate()?;

        self.risk_repo
            .find_by_id(risk_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Risk not found".to_string()))?;

        let score = scoring::assess(payload.impact_scale, payload.probability_scale);

        let stored = self
            .assessment_repo
            .upsert(AssessmentRecord {
                risk_id,
                variant: payload.variant.as_str(),
                impact_value: payload.impact_value,
                impact_scale: payload.impact_scale,
                probability_value: payload.probability_value,
                probability_scale: payload.probability_scale,
                exposure: score.exposure,
                level: score.level.as_str(),
                notes: payload.notes.as_deref(),
                assessed_by,
            })
            .await?;

        tracing::info!(
            "Assessment {} for risk {}: exposure={} level={}",
            stored.variant,
            risk_id,
            stored.exposure,
            stored.level
        );

        Ok(stored)
    }

    pub async fn list(&self, risk_id: Uuid) -> Result<Vec<RiskAssessment>, ServiceError> {
        self.risk_repo
            .find_by_id(risk_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Risk not found".to_string()))?;

        Ok(self.assessment_repo.list_for_risk(risk_id).await?)
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which side of the mitigation boundary an assessment measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssessmentVariant {
    Inherent,
    Residual,
}

impl AssessmentVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentVariant::Inherent => "INHERENT",
            AssessmentVariant::Residual => "RESIDUAL",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "INHERENT" => Some(AssessmentVariant::Inherent),
            "RESIDUAL" => Some(AssessmentVariant::Residual),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be between 1 and 5, got {value}")]
    ScaleOutOfRange { field: &'static str, value: i32 },
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

/// Body of `PUT /v1/risks/:id/assessments`. Raw `*_value` magnitudes are
/// stored for display and audit; only the 1..5 scales drive scoring, and the
/// scales are range-checked here so an out-of-contract pair never reaches the
/// scoring engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentPayload {
    #[serde(rename = "type")]
    pub variant: AssessmentVariant,
    pub impact_value: Decimal,
    pub impact_scale: i32,
    pub probability_value: Decimal,
    pub probability_scale: i32,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AssessmentPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_scale("impact_scale", self.impact_scale)?;
        check_scale("probability_scale", self.probability_scale)?;
        Ok(())
    }
}

fn check_scale(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if !(1..=5).contains(&value) {
        return Err(ValidationError::ScaleOutOfRange { field, value });
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct UnitPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl UnitPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("name", &self.name)
    }
}

#[derive(Debug, Deserialize)]
pub struct TaxonomyPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl TaxonomyPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("name", &self.name)
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CategoryPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("name", &self.name)
    }
}

/// A labelled step of one of the two 1..5 scales.
#[derive(Debug, Deserialize)]
pub struct CriterionPayload {
    pub kind: String, // 'IMPACT' | 'PROBABILITY'
    pub scale: i32,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CriterionPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.kind != "IMPACT" && self.kind != "PROBABILITY" {
            return Err(ValidationError::Empty { field: "kind" });
        }
        check_scale("scale", self.scale)?;
        check_not_empty("label", &self.label)
    }
}

#[derive(Debug, Deserialize)]
pub struct RiskPayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub unit_id: Option<Uuid>,
    #[serde(default)]
    pub status: Option<String>, // 'OPEN' | 'MITIGATED' | 'CLOSED'
}

impl RiskPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("title", &self.title)
    }
}

#[derive(Debug, Deserialize)]
pub struct KriPayload {
    pub name: String,
    pub metric: String,
    pub threshold: Decimal,
    pub direction: String, // 'ABOVE' | 'BELOW'
    #[serde(default)]
    pub current_value: Option<Decimal>,
}

impl KriPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("name", &self.name)?;
        check_not_empty("metric", &self.metric)?;
        if self.direction != "ABOVE" && self.direction != "BELOW" {
            return Err(ValidationError::Empty { field: "direction" });
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ControlPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub effectiveness: String, // 'EFFECTIVE' | 'PARTIAL' | 'INEFFECTIVE'
}

impl ControlPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("name", &self.name)?;
        match self.effectiveness.as_str() {
            "EFFECTIVE" | "PARTIAL" | "INEFFECTIVE" => Ok(()),
            _ => Err(ValidationError::Empty {
                field: "effectiveness",
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TreatmentPayload {
    pub title: String,
    pub action: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>, // 'PLANNED' | 'IN_PROGRESS' | 'DONE'
    #[serde(default)]
    pub assignee_id: Option<Uuid>,
}

impl TreatmentPayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("title", &self.title)?;
        check_not_empty("action", &self.action)
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportTemplatePayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub body: serde_json::Value,
}

impl ReportTemplatePayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("name", &self.name)
    }
}

/// Schedules only record when a report should go out; evaluation of the cron
/// expression belongs to the delivery worker, not this API.
#[derive(Debug, Deserialize)]
pub struct ReportSchedulePayload {
    pub cron_expr: String,
    pub recipients: Vec<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl ReportSchedulePayload {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("cron_expr", &self.cron_expr)?;
        if self.recipients.is_empty() {
            return Err(ValidationError::Empty { field: "recipients" });
        }
        Ok(())
    }
}

fn check_not_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn payload(impact: i32, probability: i32) -> AssessmentPayload {
        AssessmentPayload {
            variant: AssessmentVariant::Inherent,
            impact_value: Decimal::from(100_000),
            impact_scale: impact,
            probability_value: Decimal::new(5, 1),
            probability_scale: probability,
            notes: None,
        }
    }

    #[test]
    fn in_range_scales_pass() {
        for scale in 1..=5 {
            assert!(payload(scale, scale).validate().is_ok());
        }
    }

    #[test]
    fn out_of_range_scales_are_rejected() {
        assert!(payload(0, 3).validate().is_err());
        assert!(payload(3, 6).validate().is_err());
        assert!(payload(-1, 3).validate().is_err());
    }

    #[test]
    fn variant_tag_deserializes_from_type_field() {
        let body = serde_json::json!({
            "type": "RESIDUAL",
            "impact_value": "250000",
            "impact_scale": 4,
            "probability_value": "0.3",
            "probability_scale": 2
        });
        let parsed: AssessmentPayload = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.variant, AssessmentVariant::Residual);
        assert!(parsed.notes.is_none());
    }
}

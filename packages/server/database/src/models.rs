use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String, // 'analyst' | 'manager' | 'admin'
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct BusinessUnit {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct RiskTaxonomy {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct RiskCategory {
    pub id: Uuid,
    pub taxonomy_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One labelled step of the impact or probability scale (1..5).
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct RiskCriterion {
    pub id: Uuid,
    pub kind: String, // 'IMPACT' | 'PROBABILITY'
    pub scale: i32,
    pub label: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Risk {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub unit_id: Option<Uuid>,
    pub owner_id: Uuid,
    pub status: String, // 'OPEN' | 'MITIGATED' | 'CLOSED'
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One scored assessment of a risk. At most one row per (risk, variant);
/// submissions replace the row wholesale. `exposure` and `level` are derived
/// from the scales by the scoring crate at write time; the raw `*_value`
/// magnitudes are display/audit data and never drive scoring.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct RiskAssessment {
    pub id: Uuid,
    pub risk_id: Uuid,
    pub variant: String, // 'INHERENT' | 'RESIDUAL'
    pub impact_value: Decimal,
    pub impact_scale: i32,
    pub probability_value: Decimal,
    pub probability_scale: i32,
    pub exposure: i32,
    pub level: String, // 'VERY_LOW' .. 'VERY_HIGH'
    pub notes: Option<String>,
    pub assessed_by: Uuid,
    pub assessed_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Kri {
    pub id: Uuid,
    pub risk_id: Uuid,
    pub name: String,
    pub metric: String,
    pub threshold: Decimal,
    pub direction: String, // 'ABOVE' | 'BELOW'
    pub current_value: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Kri {
    /// A KRI is breached when its current value crosses the threshold in the
    /// monitored direction. Unknown current value means not breached.
    pub fn is_breached(&self) -> bool {
        match self.current_value {
            Some(v) if self.direction == "ABOVE" => v > self.threshold,
            Some(v) if self.direction == "BELOW" => v < self.threshold,
            _ => false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Control {
    pub id: Uuid,
    pub risk_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub effectiveness: String, // 'EFFECTIVE' | 'PARTIAL' | 'INEFFECTIVE'
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct TreatmentPlan {
    pub id: Uuid,
    pub risk_id: Uuid,
    pub title: String,
    pub action: String,
    pub due_date: Option<NaiveDate>,
    pub status: String, // 'PLANNED' | 'IN_PROGRESS' | 'DONE'
    pub assignee_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct ReportTemplate {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub body: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Delivery schedule for a template. The cron expression is stored verbatim;
/// evaluating it is the delivery worker's job.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct ReportSchedule {
    pub id: Uuid,
    pub template_id: Uuid,
    pub cron_expr: String,
    pub recipients: serde_json::Value,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn kri(direction: &str, threshold: i64, current: Option<i64>) -> Kri {
        Kri {
            id: Uuid::new_v4(),
            risk_id: Uuid::new_v4(),
            name: "failed logins".into(),
            metric: "count/day".into(),
            threshold: Decimal::from(threshold),
            direction: direction.into(),
            current_value: current.map(Decimal::from),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn kri_breach_above() {
        assert!(kri("ABOVE", 100, Some(150)).is_breached());
        assert!(!kri("ABOVE", 100, Some(100)).is_breached());
        assert!(!kri("ABOVE", 100, None).is_breached());
    }

    #[test]
    fn kri_breach_below() {
        assert!(kri("BELOW", 100, Some(50)).is_breached());
        assert!(!kri("BELOW", 100, Some(100)).is_breached());
    }
}

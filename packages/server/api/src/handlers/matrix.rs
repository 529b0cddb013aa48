use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::handlers::ServiceError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use database::repositories::AssessmentRepository;
use scoring::RiskLevel;
use shared::dto::AssessmentVariant;

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/matrix", get(matrix_handler))
}

/// One cell of the 5x5 reference heatmap. Exposure and level come from the
/// same scoring entry point the upsert path uses; `count` is how many stored
/// assessments of the requested variant sit in this cell.
#[derive(Debug, Serialize, PartialEq)]
pub struct MatrixCell {
    pub impact_scale: i32,
    pub probability_scale: i32,
    pub exposure: i32,
    pub level: RiskLevel,
    pub count: i64,
}

#[derive(Deserialize)]
pub struct MatrixQuery {
    #[serde(default = "default_variant")]
    pub variant: AssessmentVariant,
}

fn default_variant() -> AssessmentVariant {
    AssessmentVariant::Residual
}

pub async fn matrix_handler(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<MatrixQuery>,
) -> Result<Json<Vec<MatrixCell>>, ServiceError> {
    let repo = AssessmentRepository::new(state.db.pool.clone());
    let counts: HashMap<(i32, i32), i64> = repo
        .cell_counts(params.variant.as_str())
        .await?
        .into_iter()
        .map(|(impact, probability, count)| ((impact, probability), count))
        .collect();

    Ok(Json(build_grid(&counts)))
}

/// The reference grid itself does not depend on stored rows; counts are
/// merged in per cell.
fn build_grid(counts: &HashMap<(i32, i32), i64>) -> Vec<MatrixCell> {
    let mut cells = Vec::with_capacity(25);
    for impact_scale in 1..=5 {
        for probability_scale in 1..=5 {
            let score = scoring::assess(impact_scale, probability_scale);
            cells.push(MatrixCell {
                impact_scale,
                probability_scale,
                exposure: score.exposure,
                level: score.level,
                count: counts
                    .get(&(impact_scale, probability_scale))
                    .copied()
                    .unwrap_or(0),
            });
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_all_25_cells() {
        let cells = build_grid(&HashMap::new());
        assert_eq!(cells.len(), 25);
        for cell in &cells {
            assert_eq!(cell.exposure, cell.impact_scale * cell.probability_scale);
            assert_eq!(cell.count, 0);
        }
    }

    #[test]
    fn grid_levels_match_the_scoring_engine() {
        // A cell's level must be exactly what an assessment with the same
        // scales would store.
        for cell in build_grid(&HashMap::new()) {
            let stored = scoring::assess(cell.impact_scale, cell.probability_scale);
            assert_eq!(cell.level, stored.level);
            assert_eq!(cell.exposure, stored.exposure);
        }
    }

    #[test]
    fn counts_are_merged_into_matching_cells() {
        let mut counts = HashMap::new();
        counts.insert((4, 5), 3i64);
        let cells = build_grid(&counts);

        let hot = cells
            .iter()
            .find(|c| c.impact_scale == 4 && c.probability_scale == 5)
            .unwrap();
        assert_eq!(hot.count, 3);
        assert_eq!(hot.level, RiskLevel::VeryHigh);

        let total: i64 = cells.iter().map(|c| c.count).sum();
        assert_eq!(total, 3);
    }
}

use crate::level::RiskLevel;
use serde::{Deserialize, Serialize};

/// Result of scoring one (impact, probability) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub exposure: i32,
    pub level: RiskLevel,
}

/// Raw exposure: the product of the two ordinal scales. No weighting, no
/// rounding. Callers are expected to pass scales in [1,5]; the function itself
/// is plain arithmetic and does not validate.
pub fn compute_exposure(impact_scale: i32, probability_scale: i32) -> i32 {
    impact_scale * probability_scale
}

/// Maps an exposure to its severity band. Total over all integers: anything
/// below 5, zero and negatives included, is VeryLow. Band lower bounds are
/// inclusive, evaluated from the most severe band down.
pub fn classify_level(exposure: i32) -> RiskLevel {
    if exposure >= 20 {
        RiskLevel::VeryHigh
    } else if exposure >= 15 {
        RiskLevel::High
    } else if exposure >= 10 {
        RiskLevel::Moderate
    } else if exposure >= 5 {
        RiskLevel::Low
    } else {
        RiskLevel::VeryLow
    }
}

/// The single entry point for scoring. Both the assessment-upsert path and
/// the matrix aggregation path go through here, so a stored level and an
/// ad-hoc matrix level can never disagree for the same exposure.
pub fn assess(impact_scale: i32, probability_scale: i32) -> Score {
    let exposure = compute_exposure(impact_scale, probability_scale);
    Score {
        exposure,
        level: classify_level(exposure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposure_is_plain_product() {
        assert_eq!(compute_exposure(4, 5), 20);
        assert_eq!(compute_exposure(1, 1), 1);
        assert_eq!(compute_exposure(5, 5), 25);
    }

    #[test]
    fn exposure_is_commutative() {
        for a in -3..=8 {
            for b in -3..=8 {
                assert_eq!(compute_exposure(a, b), compute_exposure(b, a));
            }
        }
    }

    #[test]
    fn classify_is_total_below_the_ladder() {
        assert_eq!(classify_level(0), RiskLevel::VeryLow);
        assert_eq!(classify_level(-12), RiskLevel::VeryLow);
        assert_eq!(classify_level(i32::MIN), RiskLevel::VeryLow);
        assert_eq!(classify_level(i32::MAX), RiskLevel::VeryHigh);
    }
}

use scoring::{assess, classify_level, compute_exposure, RiskLevel};

#[test]
fn band_boundaries_are_exact() {
    assert_eq!(classify_level(4), RiskLevel::VeryLow);
    assert_eq!(classify_level(5), RiskLevel::Low);
    assert_eq!(classify_level(9), RiskLevel::Low);
    assert_eq!(classify_level(10), RiskLevel::Moderate);
    assert_eq!(classify_level(14), RiskLevel::Moderate);
    assert_eq!(classify_level(15), RiskLevel::High);
    assert_eq!(classify_level(19), RiskLevel::High);
    assert_eq!(classify_level(20), RiskLevel::VeryHigh);
    assert_eq!(classify_level(25), RiskLevel::VeryHigh);
}

#[test]
fn classification_is_monotonic_in_exposure() {
    let mut previous = classify_level(-5);
    for exposure in -4..=30 {
        let current = classify_level(exposure);
        assert!(
            current >= previous,
            "level dropped from {previous:?} to {current:?} at exposure {exposure}"
        );
        previous = current;
    }
}

#[test]
fn assess_is_deterministic_over_the_full_grid() {
    for impact in 1..=5 {
        for probability in 1..=5 {
            let first = assess(impact, probability);
            let second = assess(impact, probability);
            assert_eq!(first, second);
            assert_eq!(first.exposure, impact * probability);
            assert_eq!(first.level, classify_level(first.exposure));
        }
    }
}

#[test]
fn assess_matches_classify_for_any_exposure() {
    // The stored level from an upsert and the level a matrix cell computes
    // must agree whenever the exposure is the same.
    for impact in 1..=5 {
        for probability in 1..=5 {
            let stored = assess(impact, probability);
            let ad_hoc = classify_level(compute_exposure(impact, probability));
            assert_eq!(stored.level, ad_hoc);
        }
    }
}

#[test]
fn severe_corner_of_the_matrix() {
    let score = assess(4, 5);
    assert_eq!(score.exposure, 20);
    assert_eq!(score.level, RiskLevel::VeryHigh);
}

#[test]
fn low_scores_stay_very_low() {
    let score = assess(2, 2);
    assert_eq!(score.exposure, 4);
    assert_eq!(score.level, RiskLevel::VeryLow);
}

#[test]
fn mid_band_scenarios() {
    let low = assess(3, 3);
    assert_eq!(low.exposure, 9);
    assert_eq!(low.level, RiskLevel::Low);

    let moderate = assess(3, 4);
    assert_eq!(moderate.exposure, 12);
    assert_eq!(moderate.level, RiskLevel::Moderate);
}

#[test]
fn out_of_contract_scales_still_score() {
    // Upstream validation rejects these; the engine itself extrapolates.
    let score = assess(6, 6);
    assert_eq!(score.exposure, 36);
    assert_eq!(score.level, RiskLevel::VeryHigh);

    let zero = assess(0, 3);
    assert_eq!(zero.exposure, 0);
    assert_eq!(zero.level, RiskLevel::VeryLow);
}

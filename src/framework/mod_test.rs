use super::*;

fn all_modes() -> [AssessmentMode; 2] {
    [AssessmentMode::DirectInvestment, AssessmentMode::VentureBuild]
}

fn all_stages() -> [InvestmentStage; 2] {
    [InvestmentStage::Seed, InvestmentStage::SeriesA]
}

#[test]
fn framework_weights_sum_to_100() {
    for mode in all_modes() {
        for stage in all_stages() {
            let total: u32 = framework(mode, stage).iter().map(|c| c.weight).sum();
            assert_eq!(total, 100, "{mode}/{stage} weights must sum to 100");
        }
    }
}

#[test]
fn risk_framework_weights_sum_to_100() {
    for mode in all_modes() {
        let total: u32 = risk_framework(mode).iter().map(|c| c.weight).sum();
        assert_eq!(total, 100, "{mode} risk weights must sum to 100");
    }
}

#[test]
fn risk_framework_weight_shape_is_fixed() {
    for mode in all_modes() {
        let fw = risk_framework(mode);
        let shape: Vec<(&str, u32)> = fw.iter().map(|c| (c.name, c.weight)).collect();
        assert_eq!(
            shape,
            vec![
                ("Critical Risk", 40),
                ("High Risk", 30),
                ("Medium Risk", 20),
                ("Low Risk", 10),
            ],
            "{mode} risk categories must keep the Critical/High/Medium/Low shape"
        );
    }
}

#[test]
fn seed_stage_shifts_weight_to_team() {
    let seed = framework(AssessmentMode::DirectInvestment, InvestmentStage::Seed);
    let series_a = framework(AssessmentMode::DirectInvestment, InvestmentStage::SeriesA);

    let weight = |fw: &[Category], name: &str| find_category(fw, name).map(|c| c.weight);

    assert_eq!(weight(&seed, "Founder & Team Excellence"), Some(40));
    assert_eq!(weight(&series_a, "Founder & Team Excellence"), Some(30));
    assert_eq!(weight(&seed, "Financial Performance & Metrics"), Some(10));
    assert_eq!(weight(&series_a, "Financial Performance & Metrics"), Some(30));
    // Product weight is stage-independent
    assert_eq!(weight(&seed, "Product & Technology"), Some(15));
    assert_eq!(weight(&series_a, "Product & Technology"), Some(15));
}

#[test]
fn venture_build_ignores_stage() {
    let a = framework(AssessmentMode::VentureBuild, InvestmentStage::Seed);
    let b = framework(AssessmentMode::VentureBuild, InvestmentStage::SeriesA);
    let shape = |fw: &[Category]| {
        fw.iter()
            .map(|c| (c.name, c.weight, c.criteria.len()))
            .collect::<Vec<_>>()
    };
    assert_eq!(shape(&a), shape(&b));
}

#[test]
fn every_category_has_criteria() {
    for mode in all_modes() {
        for stage in all_stages() {
            for cat in framework(mode, stage) {
                assert!(!cat.criteria.is_empty(), "{mode}: {} has no criteria", cat.name);
            }
        }
        for cat in risk_framework(mode) {
            assert!(!cat.criteria.is_empty(), "{mode}: {} has no criteria", cat.name);
        }
    }
}

#[test]
fn criterion_names_unique_within_category() {
    for mode in all_modes() {
        for cat in framework(mode, InvestmentStage::Seed)
            .into_iter()
            .chain(risk_framework(mode))
        {
            for (i, c) in cat.criteria.iter().enumerate() {
                assert!(
                    !cat.criteria[..i].iter().any(|other| other.name == c.name),
                    "duplicate criterion {:?} in {}",
                    c.name,
                    cat.name
                );
            }
        }
    }
}

#[test]
fn risk_criteria_carry_factors() {
    for mode in all_modes() {
        for cat in risk_framework(mode) {
            for c in cat.criteria {
                assert!(
                    !c.factors.is_empty(),
                    "risk criterion {:?} should list red-flag factors",
                    c.name
                );
            }
        }
    }
}

#[test]
fn quality_criteria_have_no_factors() {
    for mode in all_modes() {
        for cat in framework(mode, InvestmentStage::Seed) {
            for c in cat.criteria {
                assert!(c.factors.is_empty(), "{:?} is not a risk criterion", c.name);
            }
        }
    }
}

#[test]
fn category_criterion_lookup() {
    let fw = framework(AssessmentMode::DirectInvestment, InvestmentStage::Seed);
    let team = find_category(&fw, "Founder & Team Excellence").unwrap();
    assert!(team.criterion("Founder-Market Fit & Authenticity").is_some());
    assert!(team.criterion("No Such Criterion").is_none());
    assert!(find_category(&fw, "No Such Category").is_none());
}

#[test]
fn mode_and_stage_round_trip_through_strings() {
    for mode in all_modes() {
        assert_eq!(AssessmentMode::parse(mode.as_str()), Some(mode));
    }
    for stage in all_stages() {
        assert_eq!(InvestmentStage::parse(stage.as_str()), Some(stage));
    }
    assert_eq!(AssessmentMode::parse("buyout"), None);
    assert_eq!(InvestmentStage::parse("series-b"), None);
}

use super::*;
use crate::framework::{AssessmentMode, risk_framework};
use crate::scoring::TotalScore;

fn total(score: f64, risk_impact: f64) -> TotalScore {
    TotalScore {
        score,
        completion: 100.0,
        risk_impact,
    }
}

/// Score every criterion of the Critical Risk category at `value`.
fn critical_risk_scores(mode: AssessmentMode, value: u8) -> ScoreStore {
    let rf = risk_framework(mode);
    let critical = find_category(&rf, CRITICAL_RISK_CATEGORY).unwrap();
    let mut store = ScoreStore::new();
    for c in critical.criteria {
        store.set(critical.name, c.name, Some(value)).unwrap();
    }
    store
}

#[test]
fn critical_risk_veto_beats_exceptional_score() {
    let mode = AssessmentMode::DirectInvestment;
    let rf = risk_framework(mode);
    let store = critical_risk_scores(mode, 2); // average 2.0 <= 2.5

    let rec = recommend(&total(95.0, 0.0), mode, &rf, &store);
    assert_eq!(rec.decision, Decision::AutoReject);
    assert_eq!(
        rec.message,
        "Critical risk factors detected. Auto-reject recommended."
    );
}

#[test]
fn unscored_critical_risk_does_not_veto() {
    let mode = AssessmentMode::DirectInvestment;
    let rf = risk_framework(mode);

    let rec = recommend(&total(95.0, 0.0), mode, &rf, &ScoreStore::new());
    assert_eq!(rec.decision, Decision::Invest);
}

#[test]
fn critical_risk_above_cutoff_does_not_veto() {
    let mode = AssessmentMode::DirectInvestment;
    let rf = risk_framework(mode);
    let store = critical_risk_scores(mode, 4); // average 4.0 > 2.5

    let rec = recommend(&total(95.0, 0.0), mode, &rf, &store);
    assert_eq!(rec.decision, Decision::Invest);
}

#[test]
fn high_risk_impact_forces_partner_review() {
    let mode = AssessmentMode::DirectInvestment;
    let rf = risk_framework(mode);

    // Critical Risk unscored, so rule 1 does not fire; impact > 25 escalates
    // even though the score clears the exceptional threshold.
    let rec = recommend(&total(90.0, 26.3), mode, &rf, &ScoreStore::new());
    assert_eq!(rec.decision, Decision::PartnerReview);
    assert_eq!(
        rec.message,
        "High risk impact detected (-26.3 points). Partner review required."
    );
}

#[test]
fn risk_impact_at_threshold_does_not_escalate() {
    let mode = AssessmentMode::DirectInvestment;
    let rf = risk_framework(mode);
    let rec = recommend(&total(90.0, 25.0), mode, &rf, &ScoreStore::new());
    assert_eq!(rec.decision, Decision::Invest);
}

#[test]
fn veto_takes_precedence_over_escalation() {
    let mode = AssessmentMode::DirectInvestment;
    let rf = risk_framework(mode);
    let store = critical_risk_scores(mode, 1);
    let rec = recommend(&total(90.0, 40.0), mode, &rf, &store);
    assert_eq!(rec.decision, Decision::AutoReject);
}

#[test]
fn direct_investment_threshold_boundaries() {
    let mode = AssessmentMode::DirectInvestment;
    let rf = risk_framework(mode);
    let empty = ScoreStore::new();
    let decide = |score: f64| recommend(&total(score, 0.0), mode, &rf, &empty).decision;

    assert_eq!(decide(80.0), Decision::Invest);
    assert_eq!(decide(79.999), Decision::Proceed);
    assert_eq!(decide(60.0), Decision::Proceed);
    assert_eq!(decide(59.999), Decision::Pass);
    assert_eq!(decide(0.0), Decision::Pass);
}

#[test]
fn venture_build_uses_higher_thresholds() {
    let mode = AssessmentMode::VentureBuild;
    let rf = risk_framework(mode);
    let empty = ScoreStore::new();
    let decide = |score: f64| recommend(&total(score, 0.0), mode, &rf, &empty).decision;

    assert_eq!(decide(85.0), Decision::Build);
    assert_eq!(decide(84.9), Decision::Proceed);
    assert_eq!(decide(70.0), Decision::Proceed);
    assert_eq!(decide(69.9), Decision::Pass);
}

#[test]
fn same_score_decides_differently_per_mode() {
    // 82 clears direct investment's bar (80) but not venture build's (85).
    let empty = ScoreStore::new();

    let di = AssessmentMode::DirectInvestment;
    let rec = recommend(&total(82.0, 0.0), di, &risk_framework(di), &empty);
    assert_eq!(rec.decision, Decision::Invest);

    let vb = AssessmentMode::VentureBuild;
    let rec = recommend(&total(82.0, 0.0), vb, &risk_framework(vb), &empty);
    assert_eq!(rec.decision, Decision::Proceed);
}

#[test]
fn positive_decisions_carry_fixed_messages() {
    let mode = AssessmentMode::DirectInvestment;
    let rf = risk_framework(mode);
    let empty = ScoreStore::new();

    let rec = recommend(&total(85.0, 0.0), mode, &rf, &empty);
    assert_eq!(rec.message, "Exceptional opportunity. Proceed immediately.");

    let rec = recommend(&total(65.0, 0.0), mode, &rf, &empty);
    assert_eq!(rec.message, "Solid opportunity. Proceed with due diligence.");

    let rec = recommend(&total(30.0, 0.0), mode, &rf, &empty);
    assert_eq!(rec.message, "Insufficient score. Does not meet criteria.");
}

#[test]
fn decision_labels() {
    assert_eq!(Decision::AutoReject.as_str(), "AUTO-REJECT");
    assert_eq!(Decision::PartnerReview.as_str(), "PARTNER REVIEW");
    assert_eq!(Decision::Invest.to_string(), "INVEST");
    assert_eq!(Decision::Build.to_string(), "BUILD");
}

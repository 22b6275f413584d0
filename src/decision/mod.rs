//! Decision engine: turns a total score plus the risk breakdown into an
//! investment recommendation.
//!
//! The rules form a priority cascade, first match wins:
//! 1. a scored Critical Risk category averaging 2.5 or below vetoes the
//!    deal outright, regardless of quality score;
//! 2. an aggregate risk penalty above 25 points escalates to partner
//!    review, even for an otherwise exceptional score;
//! 3. otherwise the score is compared against mode-specific thresholds.

use std::fmt;

use serde::Serialize;

use crate::framework::{AssessmentMode, Category, find_category};
use crate::scoring::{ScoreStore, TotalScore, score_category};

/// Aggregate risk penalty (points) above which a human must review.
pub const RISK_IMPACT_THRESHOLD: f64 = 25.0;

/// A Critical Risk average at or below this (and above zero) auto-rejects.
pub const CRITICAL_RISK_CUTOFF: f64 = 2.5;

/// Name of the veto category in every risk framework.
pub const CRITICAL_RISK_CATEGORY: &str = "Critical Risk";

/// Score thresholds for the positive decisions, per assessment mode.
/// Venture builds are held to a higher bar than direct investments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub exceptional: f64,
    pub promising: f64,
}

pub fn thresholds(mode: AssessmentMode) -> Thresholds {
    match mode {
        AssessmentMode::DirectInvestment => Thresholds {
            exceptional: 80.0,
            promising: 60.0,
        },
        AssessmentMode::VentureBuild => Thresholds {
            exceptional: 85.0,
            promising: 70.0,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    #[serde(rename = "AUTO-REJECT")]
    AutoReject,
    #[serde(rename = "PARTNER REVIEW")]
    PartnerReview,
    #[serde(rename = "INVEST")]
    Invest,
    #[serde(rename = "BUILD")]
    Build,
    #[serde(rename = "PROCEED")]
    Proceed,
    #[serde(rename = "PASS")]
    Pass,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AutoReject => "AUTO-REJECT",
            Self::PartnerReview => "PARTNER REVIEW",
            Self::Invest => "INVEST",
            Self::Build => "BUILD",
            Self::Proceed => "PROCEED",
            Self::Pass => "PASS",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub decision: Decision,
    pub message: String,
}

/// Apply the decision cascade.
pub fn recommend(
    total: &TotalScore,
    mode: AssessmentMode,
    risk_framework: &[Category],
    risk_scores: &ScoreStore,
) -> Recommendation {
    // Rule 1: critical-risk veto. Fires only once the category has at least
    // one entry; an unscored Critical Risk category never rejects.
    if let Some(critical) = find_category(risk_framework, CRITICAL_RISK_CATEGORY) {
        let average = score_category(critical, risk_scores).average;
        if average > 0.0 && average <= CRITICAL_RISK_CUTOFF {
            return Recommendation {
                decision: Decision::AutoReject,
                message: "Critical risk factors detected. Auto-reject recommended.".to_string(),
            };
        }
    }

    // Rule 2: risk-impact escalation.
    if total.risk_impact > RISK_IMPACT_THRESHOLD {
        return Recommendation {
            decision: Decision::PartnerReview,
            message: format!(
                "High risk impact detected (-{:.1} points). Partner review required.",
                total.risk_impact
            ),
        };
    }

    // Rule 3: mode-specific thresholds.
    let t = thresholds(mode);
    if total.score >= t.exceptional {
        Recommendation {
            decision: match mode {
                AssessmentMode::VentureBuild => Decision::Build,
                AssessmentMode::DirectInvestment => Decision::Invest,
            },
            message: "Exceptional opportunity. Proceed immediately.".to_string(),
        }
    } else if total.score >= t.promising {
        Recommendation {
            decision: Decision::Proceed,
            message: "Solid opportunity. Proceed with due diligence.".to_string(),
        }
    } else {
        Recommendation {
            decision: Decision::Pass,
            message: "Insufficient score. Does not meet criteria.".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

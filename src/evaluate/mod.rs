//! The `score` command: evaluate a saved assessment file.
//!
//! Loads and validates the file, computes per-category breakdowns for both
//! frameworks, the total score and risk impact, and the decision
//! recommendation, then prints a table report or JSON.

mod report;

use std::error::Error;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::assessment::{self, Assessment};
use crate::decision::{Recommendation, recommend};
use crate::framework::{AssessmentMode, InvestmentStage};
use crate::scoring::{
    QUALITY_SCALE, RiskLevel, risk_level, risk_penalty, score_category, total_score,
};

pub use report::{print_json, print_report};

/// One criterion with its entered score, if any.
#[derive(Debug, Clone, Serialize)]
pub struct CriterionEntry {
    pub name: &'static str,
    pub score: Option<u8>,
}

/// Breakdown of one quality category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreakdown {
    pub name: &'static str,
    pub weight: u32,
    pub average: f64,
    /// Points contributed to the 100-point total; a fully scored category
    /// of all 5s contributes exactly its weight.
    pub points: f64,
    pub completion: f64,
    pub scored: usize,
    pub criteria: usize,
    pub entries: Vec<CriterionEntry>,
}

/// Breakdown of one risk category.
#[derive(Debug, Clone, Serialize)]
pub struct RiskBreakdown {
    pub name: &'static str,
    pub weight: u32,
    pub average: f64,
    /// Qualitative level; `None` until the category has an entry.
    pub level: Option<RiskLevel>,
    /// Points this category deducts from the total.
    pub penalty: f64,
    pub completion: f64,
    pub scored: usize,
    pub criteria: usize,
    pub entries: Vec<CriterionEntry>,
}

/// Everything a score report shows, derived from one assessment.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessed: Option<NaiveDate>,
    pub mode: AssessmentMode,
    pub stage: InvestmentStage,
    pub score: f64,
    pub risk_impact: f64,
    /// Overall completion, 0–100: mean category completion averaged across
    /// the two frameworks.
    pub completion: f64,
    pub recommendation: Recommendation,
    pub categories: Vec<CategoryBreakdown>,
    pub risk: Vec<RiskBreakdown>,
}

pub fn run(path: &Path, json: bool, full: bool) -> Result<(), Box<dyn Error>> {
    let assessment = assessment::load(path)?;
    let eval = evaluate(&assessment);
    if json {
        print_json(&eval)
    } else {
        print_report(&eval, full);
        Ok(())
    }
}

/// Derive the full evaluation from an assessment. Pure; shared by the
/// `score` command and the wizard's Results step.
pub fn evaluate(assessment: &Assessment) -> Evaluation {
    let fw = assessment.framework();
    let rf = assessment.risk_framework();

    let categories: Vec<CategoryBreakdown> = fw
        .iter()
        .map(|cat| {
            let cs = score_category(cat, &assessment.scores);
            CategoryBreakdown {
                name: cat.name,
                weight: cat.weight,
                average: cs.average,
                points: cs.weighted * QUALITY_SCALE,
                completion: cs.completion,
                scored: assessment.scores.scored_count(cat.name),
                criteria: cat.criteria.len(),
                entries: entries(cat, &assessment.scores),
            }
        })
        .collect();

    let risk: Vec<RiskBreakdown> = rf
        .iter()
        .map(|cat| {
            let cs = score_category(cat, &assessment.risk_scores);
            let scored = assessment.risk_scores.scored_count(cat.name);
            RiskBreakdown {
                name: cat.name,
                weight: cat.weight,
                average: cs.average,
                level: (scored > 0).then(|| risk_level(cs.average)),
                penalty: risk_penalty(cat, &assessment.risk_scores),
                completion: cs.completion,
                scored,
                criteria: cat.criteria.len(),
                entries: entries(cat, &assessment.risk_scores),
            }
        })
        .collect();

    let total = total_score(&fw, &rf, &assessment.scores, &assessment.risk_scores);
    let completion = display_completion(&categories, &risk);
    let recommendation = recommend(&total, assessment.mode, &rf, &assessment.risk_scores);

    Evaluation {
        company: assessment.company.clone(),
        assessed: assessment.assessed,
        mode: assessment.mode,
        stage: assessment.stage,
        score: total.score,
        risk_impact: total.risk_impact,
        completion,
        recommendation,
        categories,
        risk,
    }
}

fn entries(cat: &crate::framework::Category, store: &crate::scoring::ScoreStore) -> Vec<CriterionEntry> {
    cat.criteria
        .iter()
        .map(|c| CriterionEntry {
            name: c.name,
            score: store.get(cat.name, c.name),
        })
        .collect()
}

/// Mean category completion of each framework, averaged. Stays on the 0–100
/// scale regardless of category counts.
fn display_completion(categories: &[CategoryBreakdown], risk: &[RiskBreakdown]) -> f64 {
    let mean = |sum: f64, n: usize| if n > 0 { sum / n as f64 } else { 0.0 };
    let quality = mean(categories.iter().map(|c| c.completion).sum(), categories.len());
    let risky = mean(risk.iter().map(|r| r.completion).sum(), risk.len());
    (quality + risky) / 2.0
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

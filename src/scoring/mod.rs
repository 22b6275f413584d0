//! Score storage and the weighted scoring model.
//!
//! Scores are integers 1–5, entered per (category, criterion) pair and kept
//! in two independent stores: one for the quality framework, one for the
//! risk framework. All derived numbers are recomputed from the stores on
//! every call; nothing here is cached.
//!
//! The category average divides by the TOTAL criteria count, not the scored
//! count, so a half-scored category scores half as high: missing data is
//! penalized, not ignored. The decision thresholds are calibrated against
//! this behavior.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use serde::Serialize;

use crate::framework::Category;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// Rescales a weighted category average (0–5 × weight fraction) to the
/// 100-point scale: a 5.0 average at 100% combined weight yields 100 points.
pub const QUALITY_SCALE: f64 = 20.0;

/// Rescales an inverted risk average into penalty points. Across the fixed
/// 40/30/20/10 weight shape the worst case deducts 5 * 8 = 40 points.
pub const RISK_SCALE: f64 = 8.0;

/// Rejected score writes. Range violations come from the store itself;
/// unknown names are raised by callers that validate against a framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    OutOfRange {
        category: String,
        criterion: String,
        value: u8,
    },
    UnknownCategory {
        category: String,
    },
    UnknownCriterion {
        category: String,
        criterion: String,
    },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                category,
                criterion,
                value,
            } => write!(
                f,
                "score {value} for {category:?} / {criterion:?} is out of range (expected {MIN_SCORE}-{MAX_SCORE})"
            ),
            Self::UnknownCategory { category } => {
                write!(f, "unknown category {category:?}")
            }
            Self::UnknownCriterion {
                category,
                criterion,
            } => write!(f, "unknown criterion {criterion:?} in category {category:?}"),
        }
    }
}

impl Error for ScoreError {}

/// User-entered scores: category name → criterion name → score (1–5).
///
/// Writing `None` deletes an entry; a category map that becomes empty is
/// dropped so the store never holds empty categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreStore {
    entries: BTreeMap<String, BTreeMap<String, u8>>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write or delete one entry. Values outside 1–5 are rejected at this
    /// boundary; the calculators themselves never validate.
    pub fn set(
        &mut self,
        category: &str,
        criterion: &str,
        value: Option<u8>,
    ) -> Result<(), ScoreError> {
        match value {
            Some(v) if !(MIN_SCORE..=MAX_SCORE).contains(&v) => Err(ScoreError::OutOfRange {
                category: category.to_string(),
                criterion: criterion.to_string(),
                value: v,
            }),
            Some(v) => {
                self.entries
                    .entry(category.to_string())
                    .or_default()
                    .insert(criterion.to_string(), v);
                Ok(())
            }
            None => {
                if let Some(scores) = self.entries.get_mut(category) {
                    scores.remove(criterion);
                    if scores.is_empty() {
                        self.entries.remove(category);
                    }
                }
                Ok(())
            }
        }
    }

    pub fn get(&self, category: &str, criterion: &str) -> Option<u8> {
        self.entries.get(category)?.get(criterion).copied()
    }

    /// Number of scored criteria in one category.
    pub fn scored_count(&self, category: &str) -> usize {
        self.entries.get(category).map_or(0, BTreeMap::len)
    }

    /// Sum of the entered scores in one category.
    pub fn score_sum(&self, category: &str) -> u32 {
        self.entries
            .get(category)
            .map_or(0, |scores| scores.values().map(|&v| u32::from(v)).sum())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The raw category → criterion → score mapping, for serialization.
    pub fn entries(&self) -> &BTreeMap<String, BTreeMap<String, u8>> {
        &self.entries
    }
}

/// Derived per-category result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryScore {
    /// Mean over the TOTAL criteria count (unscored criteria pull it down).
    pub average: f64,
    /// Average scaled by the category weight fraction.
    pub weighted: f64,
    /// Percentage of the category's criteria that have an entry.
    pub completion: f64,
}

/// Derived overall result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TotalScore {
    /// 0–100 quality score after the risk penalty, clamped.
    pub score: f64,
    /// Blended completion signal: quality completions summed per category,
    /// halved against the mean risk completion. Exceeds 100 when several
    /// categories are complete; divide by the category count for display.
    pub completion: f64,
    /// Penalty points deducted for risk (not clamped).
    pub risk_impact: f64,
}

/// Score one category against a store.
///
/// A category with no criteria yields an all-zero result; this is the only
/// defensive branch in the engine.
pub fn score_category(category: &Category, store: &ScoreStore) -> CategoryScore {
    let criteria_count = category.criteria.len();
    if criteria_count == 0 {
        return CategoryScore {
            average: 0.0,
            weighted: 0.0,
            completion: 0.0,
        };
    }

    let scored_count = store.scored_count(category.name);
    let sum = f64::from(store.score_sum(category.name));

    let average = if scored_count > 0 {
        sum / criteria_count as f64
    } else {
        0.0
    };
    let weighted = average * f64::from(category.weight) / 100.0;
    let completion = scored_count as f64 / criteria_count as f64 * 100.0;

    CategoryScore {
        average,
        weighted,
        completion,
    }
}

/// Penalty points one risk category contributes to the total.
///
/// Risk scores are inverted (5 = red flags absent becomes 1, 1 becomes 5)
/// so that bad findings deduct more. An unscored category contributes zero.
pub fn risk_penalty(category: &Category, store: &ScoreStore) -> f64 {
    let average = score_category(category, store).average;
    let inverted = if average > 0.0 { 6.0 - average } else { 0.0 };
    inverted * f64::from(category.weight) / 100.0 * RISK_SCALE
}

/// Aggregate all quality and risk categories into the total score.
pub fn total_score(
    framework: &[Category],
    risk_framework: &[Category],
    scores: &ScoreStore,
    risk_scores: &ScoreStore,
) -> TotalScore {
    let mut total_weighted = 0.0;
    let mut total_completion = 0.0;
    let mut category_count = 0usize;

    for category in framework {
        let cs = score_category(category, scores);
        total_weighted += cs.weighted * QUALITY_SCALE;
        total_completion += cs.completion;
        category_count += 1;
    }

    let mut risk_weighted = 0.0;
    let mut risk_completion = 0.0;
    let mut risk_category_count = 0usize;

    for category in risk_framework {
        risk_weighted += risk_penalty(category, risk_scores);
        risk_completion += score_category(category, risk_scores).completion;
        risk_category_count += 1;
    }

    let avg_risk_completion = if risk_category_count > 0 {
        risk_completion / risk_category_count as f64
    } else {
        0.0
    };
    total_completion =
        (total_completion + avg_risk_completion) / if category_count > 0 { 2.0 } else { 1.0 };

    let score = (total_weighted - risk_weighted).clamp(0.0, 100.0);

    TotalScore {
        score,
        completion: total_completion,
        risk_impact: risk_weighted,
    }
}

/// Qualitative risk level of a category, from its (non-inverted) average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a risk category average: high scores mean the red flags are
/// absent, so risk falls as the average rises.
pub fn risk_level(average: f64) -> RiskLevel {
    if average >= 4.0 {
        RiskLevel::Low
    } else if average >= 3.0 {
        RiskLevel::Medium
    } else if average >= 2.0 {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

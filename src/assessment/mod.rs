//! Assessment files: saved score sheets in TOML.
//!
//! The file carries the mode/stage selection, optional company metadata,
//! and the raw score tables. Loading validates every entry against the
//! active frameworks (unknown categories or criteria and out-of-range
//! values are reported with the offending name), so downstream code only
//! ever sees well-formed stores.
//!
//! ```toml
//! company = "Acme Pay"
//! assessed = "2026-08-24"
//! mode = "direct-investment"
//! stage = "seed"
//!
//! [scores."Founder & Team Excellence"]
//! "Founder Track Record & Domain Expertise" = 4
//!
//! [risk."Critical Risk"]
//! "Founding Team & Integrity" = 5
//! ```

use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::framework::{
    AssessmentMode, Category, InvestmentStage, find_category, framework, risk_framework,
};
use crate::scoring::ScoreStore;

/// On-disk representation. Scores stay as raw maps here; validation happens
/// when converting into an [`Assessment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessed: Option<NaiveDate>,
    pub mode: AssessmentMode,
    #[serde(default)]
    pub stage: InvestmentStage,
    #[serde(default)]
    pub scores: BTreeMap<String, BTreeMap<String, u8>>,
    #[serde(default)]
    pub risk: BTreeMap<String, BTreeMap<String, u8>>,
}

/// A validated assessment, ready for scoring.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub company: Option<String>,
    pub assessed: Option<NaiveDate>,
    pub mode: AssessmentMode,
    pub stage: InvestmentStage,
    pub scores: ScoreStore,
    pub risk_scores: ScoreStore,
}

impl Assessment {
    pub fn new(mode: AssessmentMode, stage: InvestmentStage) -> Self {
        Self {
            company: None,
            assessed: None,
            mode,
            stage,
            scores: ScoreStore::new(),
            risk_scores: ScoreStore::new(),
        }
    }

    pub fn framework(&self) -> Vec<Category> {
        framework(self.mode, self.stage)
    }

    pub fn risk_framework(&self) -> Vec<Category> {
        risk_framework(self.mode)
    }
}

/// Read and validate an assessment file.
pub fn load(path: &Path) -> Result<Assessment, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let file: AssessmentFile =
        toml::from_str(&text).map_err(|e| format!("{}: {e}", path.display()))?;
    from_file(file).map_err(|e| format!("{}: {e}", path.display()).into())
}

/// Validate a parsed file against its frameworks and build the stores.
pub fn from_file(file: AssessmentFile) -> Result<Assessment, Box<dyn Error>> {
    let mut assessment = Assessment::new(file.mode, file.stage);
    assessment.company = file.company;
    assessment.assessed = file.assessed;

    let fw = assessment.framework();
    fill_store(&mut assessment.scores, &fw, &file.scores, "scores")?;
    let rf = assessment.risk_framework();
    fill_store(&mut assessment.risk_scores, &rf, &file.risk, "risk")?;

    Ok(assessment)
}

fn fill_store(
    store: &mut ScoreStore,
    framework: &[Category],
    raw: &BTreeMap<String, BTreeMap<String, u8>>,
    table: &str,
) -> Result<(), Box<dyn Error>> {
    for (category, entries) in raw {
        let cat = find_category(framework, category)
            .ok_or_else(|| format!("[{table}] unknown category {category:?}"))?;
        for (criterion, &value) in entries {
            if cat.criterion(criterion).is_none() {
                return Err(
                    format!("[{table}] unknown criterion {criterion:?} in {category:?}").into(),
                );
            }
            store.set(category, criterion, Some(value)).map_err(|e| format!("[{table}] {e}"))?;
        }
    }
    Ok(())
}

/// Write an assessment back to disk as TOML.
pub fn save(path: &Path, assessment: &Assessment) -> Result<(), Box<dyn Error>> {
    let file = AssessmentFile {
        company: assessment.company.clone(),
        assessed: assessment.assessed,
        mode: assessment.mode,
        stage: assessment.stage,
        scores: assessment.scores.entries().clone(),
        risk: assessment.risk_scores.entries().clone(),
    };
    let text = toml::to_string_pretty(&file)?;
    fs::write(path, text).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

//! Static assessment framework definitions.
//!
//! A framework is an ordered set of weighted categories, each holding named
//! criteria with a 1–5 scoring guide. Quality frameworks depend on the
//! assessment mode (and, for direct investment, the stage); risk frameworks
//! depend on the mode only and always carry the Critical/High/Medium/Low
//! weight shape (40/30/20/10).
//!
//! Category weights within one framework sum to 100. This is a design
//! invariant of the tables below, verified in tests, not enforced at runtime.

mod direct;
mod risk;
mod venture;

use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of opportunity is being assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentMode {
    #[serde(rename = "direct-investment")]
    DirectInvestment,
    #[serde(rename = "venture-build")]
    VentureBuild,
}

impl AssessmentMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DirectInvestment => "direct-investment",
            Self::VentureBuild => "venture-build",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "direct-investment" => Some(Self::DirectInvestment),
            "venture-build" => Some(Self::VentureBuild),
            _ => None,
        }
    }
}

impl fmt::Display for AssessmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Funding stage of a direct-investment target. Ignored for venture builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InvestmentStage {
    #[default]
    #[serde(rename = "seed")]
    Seed,
    #[serde(rename = "series-a")]
    SeriesA,
}

impl InvestmentStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::SeriesA => "series-a",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "seed" => Some(Self::Seed),
            "series-a" => Some(Self::SeriesA),
            _ => None,
        }
    }
}

impl fmt::Display for InvestmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single evaluation unit: what to look at and how to anchor a 1–5 score.
/// Risk criteria additionally list concrete red-flag factors.
#[derive(Debug, Clone, Copy)]
pub struct Criterion {
    pub name: &'static str,
    pub description: &'static str,
    /// Textual anchors for scores 1, 3, and 5.
    pub guide: &'static str,
    pub factors: &'static [&'static str],
}

/// A weighted group of criteria.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    /// Integer percentage of the framework total.
    pub weight: u32,
    pub criteria: &'static [Criterion],
}

impl Category {
    pub fn criterion(&self, name: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.name == name)
    }
}

macro_rules! criterion {
    ($name:expr, desc: $desc:expr, guide: $guide:expr) => {
        $crate::framework::Criterion {
            name: $name,
            description: $desc,
            guide: $guide,
            factors: &[],
        }
    };
    ($name:expr, desc: $desc:expr, guide: $guide:expr,
     factors: [$($f:expr),* $(,)?]) => {
        $crate::framework::Criterion {
            name: $name,
            description: $desc,
            guide: $guide,
            factors: &[$($f),*],
        }
    };
}

pub(crate) use criterion;

/// The quality framework for the given mode. The stage adjusts category
/// weights for direct investments and is ignored for venture builds.
pub fn framework(mode: AssessmentMode, stage: InvestmentStage) -> Vec<Category> {
    match mode {
        AssessmentMode::DirectInvestment => direct::framework(stage),
        AssessmentMode::VentureBuild => venture::framework(),
    }
}

/// The risk framework for the given mode.
pub fn risk_framework(mode: AssessmentMode) -> Vec<Category> {
    match mode {
        AssessmentMode::DirectInvestment => risk::direct_investment(),
        AssessmentMode::VentureBuild => risk::venture_build(),
    }
}

/// Find a category by name within a framework.
pub fn find_category<'a>(framework: &'a [Category], name: &str) -> Option<&'a Category> {
    framework.iter().find(|c| c.name == name)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

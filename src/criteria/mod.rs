//! The `criteria` command: list the active framework's categories and
//! criteria, with weights, descriptions, scoring guides, and (for the risk
//! framework) the red-flag factors to probe for.

use std::error::Error;

use serde::Serialize;

use crate::framework::{AssessmentMode, Category, InvestmentStage, framework, risk_framework};
use crate::report_helpers;

pub fn run(
    mode: AssessmentMode,
    stage: InvestmentStage,
    risk: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let categories = if risk {
        risk_framework(mode)
    } else {
        framework(mode, stage)
    };
    if json {
        print_json(mode, stage, risk, &categories)
    } else {
        print_report(mode, stage, risk, &categories);
        Ok(())
    }
}

fn print_report(mode: AssessmentMode, stage: InvestmentStage, risk: bool, categories: &[Category]) {
    let separator = report_helpers::separator(66);

    let kind = if risk { "Risk Criteria" } else { "Scoring Criteria" };
    let header = match mode {
        AssessmentMode::DirectInvestment if !risk => {
            format!("{kind}: {} ({})", mode.as_str(), stage.as_str())
        }
        _ => format!("{kind}: {}", mode.as_str()),
    };
    println!("{header}");

    for cat in categories {
        println!("{separator}");
        println!(" {} ({}%)", cat.name, cat.weight);
        println!("{separator}");
        for criterion in cat.criteria {
            println!(" {}", criterion.name);
            println!("   {}", criterion.description);
            println!("   Guide: {}", criterion.guide);
            for factor in criterion.factors {
                println!("   - {factor}");
            }
        }
    }
    println!("{separator}");
}

#[derive(Serialize)]
struct JsonCriterion {
    name: &'static str,
    description: &'static str,
    guide: &'static str,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    factors: &'static [&'static str],
}

#[derive(Serialize)]
struct JsonCategory {
    name: &'static str,
    weight: u32,
    criteria: Vec<JsonCriterion>,
}

#[derive(Serialize)]
struct JsonListing {
    mode: AssessmentMode,
    stage: InvestmentStage,
    risk: bool,
    categories: Vec<JsonCategory>,
}

fn print_json(
    mode: AssessmentMode,
    stage: InvestmentStage,
    risk: bool,
    categories: &[Category],
) -> Result<(), Box<dyn Error>> {
    let listing = JsonListing {
        mode,
        stage,
        risk,
        categories: categories
            .iter()
            .map(|cat| JsonCategory {
                name: cat.name,
                weight: cat.weight,
                criteria: cat
                    .criteria
                    .iter()
                    .map(|c| JsonCriterion {
                        name: c.name,
                        description: c.description,
                        guide: c.guide,
                        factors: c.factors,
                    })
                    .collect(),
            })
            .collect(),
    };
    report_helpers::print_json_stdout(&listing)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

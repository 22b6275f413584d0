use super::{Evaluation, RiskBreakdown};
use crate::framework::AssessmentMode;
use crate::report_helpers;

const WIDTH: usize = 66;

/// Print the evaluation as a formatted table: header block, quality and
/// risk breakdowns, decision banner. `full` adds per-criterion rows.
pub fn print_report(eval: &Evaluation, full: bool) {
    let separator = report_helpers::separator(WIDTH);

    let header = match &eval.company {
        Some(name) => format!("Investment Assessment: {name}"),
        None => "Investment Assessment".to_string(),
    };
    println!("{header}");
    println!("{separator}");
    println!(" Mode:        {}", mode_label(eval));
    if let Some(date) = eval.assessed {
        println!(" Assessed:    {date}");
    }
    println!(" Score:       {:.1} / 100", eval.score);
    println!(" Risk Impact: -{:.1} points", eval.risk_impact);
    println!(" Completion:  {:.0}%", eval.completion);
    println!("{separator}");

    println!(
        " {:<34} {:>6}   {:>5}   {:>6}   {:>4}",
        "Category", "Weight", "Avg", "Points", "Done"
    );
    println!("{separator}");
    for cat in &eval.categories {
        println!(
            " {:<34} {:>5}%   {:>5.2}   {:>6.1}   {:>3.0}%",
            cat.name, cat.weight, cat.average, cat.points, cat.completion
        );
        if full {
            print_entries(&cat.entries);
        }
    }
    println!("{separator}");

    println!(
        " {:<34} {:>6}   {:>5}   {:<8} {:>5}",
        "Risk Category", "Weight", "Avg", "Level", "Pts"
    );
    println!("{separator}");
    for risk in &eval.risk {
        println!(
            " {:<34} {:>5}%   {:>5.2}   {:<8} {:>5.1}",
            risk.name,
            risk.weight,
            risk.average,
            level_label(risk),
            -risk.penalty
        );
        if full {
            print_entries(&risk.entries);
        }
    }
    println!("{separator}");

    println!(" Decision: {}", eval.recommendation.decision);
    println!(" {}", eval.recommendation.message);
    println!("{separator}");
}

fn print_entries(entries: &[super::CriterionEntry]) {
    for e in entries {
        println!(
            "   {:<45} {}",
            e.name,
            report_helpers::score_cell(e.score)
        );
    }
}

fn mode_label(eval: &Evaluation) -> String {
    match eval.mode {
        AssessmentMode::DirectInvestment => {
            format!("{} ({})", eval.mode.as_str(), eval.stage.as_str())
        }
        AssessmentMode::VentureBuild => eval.mode.as_str().to_string(),
    }
}

fn level_label(risk: &RiskBreakdown) -> &'static str {
    match risk.level {
        Some(level) => level.as_str(),
        None => "\u{2013}",
    }
}

/// Serialize the evaluation to pretty-printed JSON and print to stdout.
pub fn print_json(eval: &Evaluation) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(eval)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;

//! The `assess` command: interactive four-step wizard on the terminal.
//!
//! Setup comes from the CLI flags; Scoring and Risk prompt once per
//! criterion on stdin. Quality scores are required (the session will not
//! advance past an incomplete category), risk scores may be skipped with
//! an empty line. Results reuses the `score` command's report.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::Local;

use crate::assessment::{self, Assessment};
use crate::evaluate;
use crate::framework::{AssessmentMode, Criterion, InvestmentStage};
use crate::scoring::{MAX_SCORE, MIN_SCORE};
use crate::session::{AssessmentSession, Step};

pub fn run(
    mode: AssessmentMode,
    stage: InvestmentStage,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let assessment = collect(mode, stage, &mut input)?;

    println!();
    evaluate::print_report(&evaluate::evaluate(&assessment), true);

    if let Some(path) = output {
        assessment::save(path, &assessment)?;
        println!("Saved assessment to {}", path.display());
    }
    Ok(())
}

/// Walk the session through all four steps, prompting on `input`.
fn collect(
    mode: AssessmentMode,
    stage: InvestmentStage,
    input: &mut impl BufRead,
) -> Result<Assessment, Box<dyn Error>> {
    let mut session = AssessmentSession::new(mode, stage);

    banner(Step::Setup);
    match mode {
        AssessmentMode::DirectInvestment => {
            println!(" Mode: {} ({})", mode.as_str(), stage.as_str())
        }
        AssessmentMode::VentureBuild => println!(" Mode: {}", mode.as_str()),
    }
    prompt(" Company name (Enter to skip): ")?;
    let line = read_line(input)?;
    let company = (!line.trim().is_empty()).then(|| line.trim().to_string());
    session.next()?;

    banner(Step::Scoring);
    while session.step() == Step::Scoring {
        let cat = session
            .current_category()
            .ok_or("framework has no categories")?;
        println!();
        println!(" {} ({}%)", cat.name, cat.weight);
        for criterion in cat.criteria {
            let value = prompt_score(input, criterion, true)?;
            session.set_score(cat.name, criterion.name, value)?;
        }
        session.next()?;
    }

    banner(Step::Risk);
    for cat in session.risk_framework() {
        println!();
        println!(" {} ({}%)", cat.name, cat.weight);
        for criterion in cat.criteria {
            let value = prompt_score(input, criterion, false)?;
            if value.is_some() {
                session.set_risk_score(cat.name, criterion.name, value)?;
            }
        }
    }
    session.next()?;
    banner(Step::Results);

    let mut assessment = Assessment::new(mode, stage);
    assessment.company = company;
    assessment.assessed = Some(Local::now().date_naive());
    assessment.scores = session.scores().clone();
    assessment.risk_scores = session.risk_scores().clone();
    Ok(assessment)
}

/// Prompt for one criterion until the input parses. Required prompts reject
/// empty lines; optional ones treat them as a skip.
fn prompt_score(
    input: &mut impl BufRead,
    criterion: &Criterion,
    required: bool,
) -> Result<Option<u8>, Box<dyn Error>> {
    println!("   {}", criterion.name);
    println!("     {}", criterion.description);
    println!("     Guide: {}", criterion.guide);
    for factor in criterion.factors {
        println!("     - {factor}");
    }
    loop {
        if required {
            prompt(&format!("   Score ({MIN_SCORE}-{MAX_SCORE}): "))?;
        } else {
            prompt(&format!(
                "   Score ({MIN_SCORE}-{MAX_SCORE}, Enter to skip): "
            ))?;
        }
        let line = read_line(input)?;
        match parse_score(&line) {
            Ok(None) if required => println!("   A score is required here."),
            Ok(value) => return Ok(value),
            Err(msg) => println!("   {msg}"),
        }
    }
}

/// Parse one score line: empty means skip, otherwise an integer 1-5.
fn parse_score(line: &str) -> Result<Option<u8>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u8>() {
        Ok(v) if (MIN_SCORE..=MAX_SCORE).contains(&v) => Ok(Some(v)),
        _ => Err(format!(
            "Enter a number between {MIN_SCORE} and {MAX_SCORE}."
        )),
    }
}

fn banner(step: Step) {
    println!();
    println!(
        "Step {}/{}: {} - {}",
        step.index() + 1,
        Step::ALL.len(),
        step.title(),
        step.description()
    );
}

fn prompt(text: &str) -> Result<(), Box<dyn Error>> {
    print!("{text}");
    io::stdout().flush()?;
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> Result<String, Box<dyn Error>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err("unexpected end of input".into());
    }
    Ok(line)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

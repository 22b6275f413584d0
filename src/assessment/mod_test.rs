use super::*;
use crate::framework::{AssessmentMode, InvestmentStage};

use std::io::Write;

use tempfile::NamedTempFile;

fn write_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f
}

const VALID: &str = r#"
company = "Acme Pay"
assessed = "2026-08-24"
mode = "direct-investment"
stage = "seed"

[scores."Founder & Team Excellence"]
"Founder Track Record & Domain Expertise" = 4
"Founder-Market Fit & Authenticity" = 5

[risk."Critical Risk"]
"Founding Team & Integrity" = 5
"#;

#[test]
fn load_valid_file() {
    let f = write_file(VALID);
    let a = load(f.path()).unwrap();

    assert_eq!(a.company.as_deref(), Some("Acme Pay"));
    assert_eq!(a.assessed.unwrap().to_string(), "2026-08-24");
    assert_eq!(a.mode, AssessmentMode::DirectInvestment);
    assert_eq!(a.stage, InvestmentStage::Seed);
    assert_eq!(
        a.scores.get(
            "Founder & Team Excellence",
            "Founder Track Record & Domain Expertise"
        ),
        Some(4)
    );
    assert_eq!(
        a.risk_scores
            .get("Critical Risk", "Founding Team & Integrity"),
        Some(5)
    );
}

#[test]
fn stage_defaults_to_seed() {
    let f = write_file("mode = \"venture-build\"\n");
    let a = load(f.path()).unwrap();
    assert_eq!(a.stage, InvestmentStage::Seed);
    assert!(a.scores.is_empty());
    assert!(a.risk_scores.is_empty());
}

#[test]
fn unknown_mode_is_rejected() {
    let f = write_file("mode = \"buyout\"\n");
    let err = load(f.path()).unwrap_err().to_string();
    assert!(err.contains("buyout"), "got: {err}");
}

#[test]
fn unknown_category_is_reported_by_name() {
    let f = write_file(
        "mode = \"direct-investment\"\n[scores.\"Vibes\"]\n\"Feels Good\" = 5\n",
    );
    let err = load(f.path()).unwrap_err().to_string();
    assert!(err.contains("unknown category"), "got: {err}");
    assert!(err.contains("Vibes"), "got: {err}");
}

#[test]
fn unknown_criterion_is_reported_by_name() {
    let f = write_file(
        "mode = \"direct-investment\"\n[scores.\"Product & Technology\"]\n\"Moat Vibes\" = 3\n",
    );
    let err = load(f.path()).unwrap_err().to_string();
    assert!(err.contains("unknown criterion"), "got: {err}");
    assert!(err.contains("Moat Vibes"), "got: {err}");
}

#[test]
fn out_of_range_score_is_rejected() {
    let f = write_file(
        "mode = \"direct-investment\"\n[scores.\"Product & Technology\"]\n\"Innovation & IP Portfolio\" = 9\n",
    );
    let err = load(f.path()).unwrap_err().to_string();
    assert!(err.contains("out of range"), "got: {err}");
}

#[test]
fn risk_entries_validate_against_risk_framework() {
    // a quality category name is not valid in the [risk] table
    let f = write_file(
        "mode = \"direct-investment\"\n[risk.\"Product & Technology\"]\n\"Innovation & IP Portfolio\" = 3\n",
    );
    let err = load(f.path()).unwrap_err().to_string();
    assert!(err.contains("[risk]"), "got: {err}");
    assert!(err.contains("unknown category"), "got: {err}");
}

#[test]
fn save_then_load_round_trips() {
    let f = write_file(VALID);
    let a = load(f.path()).unwrap();

    let out = NamedTempFile::new().unwrap();
    save(out.path(), &a).unwrap();
    let b = load(out.path()).unwrap();

    assert_eq!(b.company, a.company);
    assert_eq!(b.assessed, a.assessed);
    assert_eq!(b.mode, a.mode);
    assert_eq!(b.stage, a.stage);
    assert_eq!(b.scores, a.scores);
    assert_eq!(b.risk_scores, a.risk_scores);
}

#[test]
fn missing_file_error_names_the_path() {
    let err = load(Path::new("/nonexistent/deal.toml"))
        .unwrap_err()
        .to_string();
    assert!(err.contains("/nonexistent/deal.toml"), "got: {err}");
}

#[test]
fn stage_affects_validation_weights_not_names() {
    // series-a keeps the same category/criterion names, so the same score
    // tables load under either stage
    let seed = write_file(VALID);
    let series_a = write_file(&VALID.replace("\"seed\"", "\"series-a\""));
    assert!(load(seed.path()).is_ok());
    assert!(load(series_a.path()).is_ok());
}

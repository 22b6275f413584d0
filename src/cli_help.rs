//! Long help text constants for CLI subcommands.
//!
//! Extracted from `cli.rs` to keep the argument definitions concise.

/// Framework listing: categories, weights, criteria, and scoring guides.
pub const CRITERIA: &str = "\
List the scoring criteria for an assessment framework.

Each framework is a set of weighted categories holding criteria scored
1-5. Category weights sum to 100% and set how much each category
contributes to the total score.

Quality framework weights:
  direct-investment (seed)      Team 40%  Market 35%  Product 15%  Financial 10%
  direct-investment (series-a)  Team 30%  Market 25%  Product 15%  Financial 30%
  venture-build                 Strategic 30%  Capability 35%  Market 25%  Success 10%

The risk framework (--risk) always weighs Critical 40%, High 30%,
Medium 20%, Low 10%, with mode-specific criteria. Risk criteria list
the concrete red flags to probe for; score 5 when they are absent,
1 when they are confirmed.

Examples:
  dg criteria                               # direct-investment, seed
  dg criteria --stage series-a              # series-a weights
  dg criteria --mode venture-build --risk   # venture-build red flags
  dg criteria --json                        # machine-readable output";

/// Batch scoring: evaluate a saved assessment file.
pub const SCORE: &str = "\
Score a saved assessment file and print the recommendation.

Reads a TOML assessment file, validates every entry against the active
frameworks, and computes:

  per category   average (1-5), contributed points, completion
  per risk       average, qualitative level, penalty points
  overall        score 0-100, risk impact, completion, decision

The total score is the weighted category sum on a 100-point scale minus
the risk penalty. Risk scores are inverted (5 = red flags absent), so
low risk entries deduct heavily.

Decision cascade, first match wins:
  Critical Risk average <= 2.5          AUTO-REJECT
  risk impact > 25 points               PARTNER REVIEW
  score >= 80 (venture-build: 85)       INVEST / BUILD
  score >= 60 (venture-build: 70)       PROCEED
  otherwise                             PASS

Unscored criteria still count in category averages: a half-scored
category scores half as high. Score everything before trusting the
number.

Examples:
  dg score deal.toml                # table report
  dg score deal.toml --full         # include per-criterion rows
  dg score deal.toml --json         # machine-readable output";

/// Interactive wizard: Setup, Scoring, Risk, Results.
pub const ASSESS: &str = "\
Run an interactive assessment wizard.

Walks through four steps:
  1. Setup     mode and stage from the flags, company name prompt
  2. Scoring   every quality criterion, scored 1-5 (required)
  3. Risk      every red-flag criterion, scored 1-5 or skipped (Enter)
  4. Results   the same report as `dg score`

Risk scoring is optional: skipped criteria carry no penalty, but also
no signal. Score 5 when the red flags are absent, 1 when confirmed.

With --output the entered scores are saved as a TOML assessment file,
dated today, that `dg score` can re-read later.

Examples:
  dg assess                                  # direct-investment, seed
  dg assess --mode venture-build             # venture-build framework
  dg assess --stage series-a -o deal.toml    # save for later re-scoring";

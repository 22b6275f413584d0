/// CLI argument definitions for the `dg` command.
///
/// Defines all subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::cli_help;
use crate::framework::{AssessmentMode, InvestmentStage};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "dg", version, about = "Investment opportunity assessment tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Framework selection shared by the criteria and assess commands.
#[derive(Args)]
pub struct ModeArgs {
    /// Assessment mode: direct-investment or venture-build
    #[arg(long, default_value = "direct-investment", value_parser = ["direct-investment", "venture-build"])]
    pub mode: String,

    /// Investment stage, direct-investment only: seed or series-a
    #[arg(long, default_value = "seed", value_parser = ["seed", "series-a"])]
    pub stage: String,
}

impl ModeArgs {
    pub fn mode(&self) -> Result<AssessmentMode, Box<dyn Error>> {
        AssessmentMode::parse(&self.mode)
            .ok_or_else(|| format!("unknown mode {:?}", self.mode).into())
    }

    pub fn stage(&self) -> Result<InvestmentStage, Box<dyn Error>> {
        InvestmentStage::parse(&self.stage)
            .ok_or_else(|| format!("unknown stage {:?}", self.stage).into())
    }
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List the scoring criteria for an assessment framework
    #[command(long_about = cli_help::CRITERIA)]
    Criteria {
        #[command(flatten)]
        selection: ModeArgs,

        /// List the risk framework instead of the quality framework
        #[arg(long)]
        risk: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a saved assessment file and print the recommendation
    #[command(long_about = cli_help::SCORE)]
    Score {
        /// Assessment file (TOML)
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Show per-criterion rows under each category
        #[arg(long)]
        full: bool,
    },

    /// Run an interactive assessment wizard
    #[command(long_about = cli_help::ASSESS)]
    Assess {
        #[command(flatten)]
        selection: ModeArgs,

        /// Save the entered scores to an assessment file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

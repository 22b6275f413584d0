mod assessment;
mod cli;
mod cli_help;
mod criteria;
mod decision;
mod evaluate;
mod framework;
mod report_helpers;
mod scoring;
mod session;
mod wizard;

use std::error::Error;
use std::io;
use std::path::Path;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands, ModeArgs};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Criteria {
            selection,
            risk,
            json,
        } => run_criteria(&selection, risk, json),
        Commands::Score { file, json, full } => evaluate::run(&file, json, full),
        Commands::Assess { selection, output } => run_assess(&selection, output.as_deref()),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "dg", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_criteria(selection: &ModeArgs, risk: bool, json: bool) -> Result<(), Box<dyn Error>> {
    criteria::run(selection.mode()?, selection.stage()?, risk, json)
}

fn run_assess(selection: &ModeArgs, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    wizard::run(selection.mode()?, selection.stage()?, output)
}

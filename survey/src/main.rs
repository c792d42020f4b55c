mod cli;
mod results;
mod sweep;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "survey",
    version,
    about = "Compare lookahead and greedy expansions over many fractions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sweep every proper fraction up to a maximum denominator.
    Run {
        #[arg(long, default_value_t = 12)]
        max_denominator: u64,
        #[arg(long, default_value = "survey-results.json")]
        out: PathBuf,
    },
    /// Summarize a results file written by `survey run`.
    Report { path: PathBuf },
}

fn main() -> Result<()> {
    unitfrac::logging::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            max_denominator,
            out,
        } => cli::run_survey(max_denominator, &out),
        Command::Report { path } => cli::report(&path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_defaults() {
        let cli = Cli::parse_from(["survey", "run"]);
        let Command::Run {
            max_denominator,
            out,
        } = cli.command
        else {
            panic!("expected run");
        };
        assert_eq!(max_denominator, 12);
        assert_eq!(out, PathBuf::from("survey-results.json"));
    }
}

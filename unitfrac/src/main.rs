//! Egyptian-fraction decomposition CLI.
//!
//! Expands proper fractions into distinct unit fractions, checks proposed
//! expansions, and compares the lookahead strategy against the greedy
//! baseline. Defaults come from `unitfrac.toml` in the working directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use tracing::debug;
use unitfrac::core::invariants::validate_decomposition;
use unitfrac::decompose::{compare, run_strategy};
use unitfrac::exit_codes;
use unitfrac::io::config::{CONFIG_FILE, UnitfracConfig, load_config, write_config};
use unitfrac::logging;
use unitfrac::render::{OutputFormat, render_comparison, render_json, render_text};
use unitfrac::{Fraction, Strategy, UnitFraction};

#[derive(Parser)]
#[command(
    name = "unitfrac",
    version,
    about = "Expand fractions into distinct unit fractions"
)]
struct Cli {
    /// Config file (defaults to `unitfrac.toml` in the working directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print an Egyptian-fraction expansion of `n/d`.
    Decompose {
        /// Proper fraction, e.g. `4/13`.
        fraction: Fraction,
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Check that the given denominators form an expansion of `n/d`.
    Check {
        fraction: Fraction,
        #[arg(required = true)]
        denominators: Vec<BigUint>,
    },
    /// Show term counts and denominator sizes for both strategies.
    Compare { fraction: Fraction },
    /// Write a default `unitfrac.toml` if missing.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    match cli.command {
        Command::Decompose {
            fraction,
            strategy,
            format,
        } => {
            let cfg = load_config(&config_path)?;
            cmd_decompose(&fraction, strategy, format, &cfg)
        }
        Command::Check {
            fraction,
            denominators,
        } => cmd_check(&fraction, denominators),
        Command::Compare { fraction } => cmd_compare(&fraction),
        Command::Init { force } => cmd_init(&config_path, force),
    }
}

fn cmd_decompose(
    fraction: &Fraction,
    strategy: Option<Strategy>,
    format: Option<OutputFormat>,
    cfg: &UnitfracConfig,
) -> Result<i32> {
    let strategy = strategy.unwrap_or(cfg.strategy);
    let format = format.unwrap_or(cfg.format);
    debug!(strategy = strategy.as_str(), ?format, "decompose");
    let decomposition = run_strategy(fraction, strategy)?;
    match format {
        OutputFormat::Text => println!("{}", render_text(&decomposition, cfg.elide_digits)),
        OutputFormat::Json => {
            print!("{}", render_json(&decomposition).context("serialize report")?);
        }
    }
    Ok(exit_codes::OK)
}

fn cmd_check(fraction: &Fraction, denominators: Vec<BigUint>) -> Result<i32> {
    let terms: Vec<UnitFraction> = denominators.into_iter().map(UnitFraction::new).collect();
    let errors = validate_decomposition(fraction, &terms);
    if !errors.is_empty() {
        for error in &errors {
            println!("violation: {}", error);
        }
        return Ok(exit_codes::MISMATCH);
    }
    let rendered: Vec<String> = terms.iter().map(ToString::to_string).collect();
    println!("ok: {} = {}", fraction, rendered.join(" + "));
    Ok(exit_codes::OK)
}

fn cmd_compare(fraction: &Fraction) -> Result<i32> {
    let comparison = compare(fraction)?;
    println!("{}", render_comparison(&comparison));
    Ok(exit_codes::OK)
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if !force && path.exists() {
        println!("init: kept existing {}", path.display());
        return Ok(exit_codes::OK);
    }
    write_config(path, &UnitfracConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    println!("init: wrote {}", path.display());
    Ok(exit_codes::OK)
}

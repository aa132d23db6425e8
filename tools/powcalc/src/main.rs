//! powcalc - Terminal front end for the power calculator
//!
//! Parses text input, hands real numbers to `power_calc::PowerCalculator`
//! and renders the classified result.

mod display;
mod input;
mod logging;
mod repl;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use power_calc::{CalcConfig, PowerCalculator};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "powcalc")]
#[command(about = "Power calculator - computes base^exponent with domain checks")]
#[command(long_about = "Power calculator - computes base^exponent with domain checks

Commands:
  eval        Evaluate a single base^exponent
  batch       Evaluate 'base exponent' pairs from a file or stdin
  repl        Interactive calculator

Examples:
  powcalc eval 2 10                     # 1024
  powcalc eval -- -8 0.5                # Complex Number Result
  echo '5 -2' | powcalc batch           # 0.04, then history
  powcalc batch inputs.txt --json       # history as JSON

Configuration: --config <FILE> (YAML) and POWCALC_* environment variables.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// YAML configuration file
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single base^exponent
    Eval {
        /// Base
        #[arg(allow_hyphen_values = true)]
        base: String,

        /// Exponent
        #[arg(allow_hyphen_values = true)]
        exponent: String,
    },

    /// Evaluate one 'base exponent' pair per line
    Batch {
        /// Input file (default: stdin)
        file: Option<PathBuf>,

        /// Print history as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Interactive calculator
    Repl,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    logging::init(cli.verbose, !cli.no_color)?;

    let config = CalcConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    debug!(?config, "Starting powcalc");
    let calc = PowerCalculator::with_config(config)?;

    match cli.command {
        Commands::Eval { base, exponent } => Ok(run_eval(&calc, &base, &exponent)),
        Commands::Batch { file, json } => {
            run_batch(&calc, file.as_deref(), json)?;
            Ok(ExitCode::SUCCESS)
        },
        Commands::Repl => {
            repl::run_repl(&calc)?;
            Ok(ExitCode::SUCCESS)
        },
    }
}

fn run_eval(calc: &PowerCalculator, base: &str, exponent: &str) -> ExitCode {
    let request = match input::parse_operands(base, exponent) {
        Ok(request) => request,
        Err(e) => {
            display::print_input_error(&e);
            return ExitCode::FAILURE;
        },
    };

    let (verdict, result) = calc.evaluate_with_verdict(request);
    display::print_rendered(&display::render(&request, verdict, &result));

    if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_batch(calc: &PowerCalculator, file: Option<&Path>, json: bool) -> Result<()> {
    let reader: Box<dyn BufRead> = match file {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Box::new(BufReader::new(f))
        },
        None => Box::new(BufReader::new(io::stdin())),
    };

    for (number, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        print!("{} {:<20} ", format!("[{}]", number + 1).dimmed(), line);
        match input::parse_line(line) {
            Ok(request) => {
                let (verdict, result) = calc.evaluate_with_verdict(request);
                let rendered = display::render(&request, verdict, &result);
                if rendered.is_error {
                    println!("{}", rendered.title.red());
                } else {
                    println!("{}", rendered.message.green());
                }
            },
            Err(e) => println!("{}", e.title().red()),
        }
    }

    println!();
    if json {
        println!("{}", calc.history().to_json()?);
    } else {
        display::print_history(&calc.history_snapshot());
    }

    Ok(())
}

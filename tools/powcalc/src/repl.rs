//! Interactive calculator loop

use anyhow::{Context, Result};
use colored::*;
use power_calc::PowerCalculator;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::display;
use crate::input;

/// Outcome of one REPL line
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run_repl(calc: &PowerCalculator) -> Result<()> {
    let config = rustyline::Config::builder()
        .auto_add_history(false)
        .build();
    let mut rl = DefaultEditor::with_config(config).context("Failed to initialize readline")?;

    println!("{}", "Power Calculator".bright_cyan().bold());
    println!(
        "Enter '{}' or '{}', type '{}' for commands\n",
        "<base> <exponent>".bright_yellow(),
        "<base>^<exponent>".bright_yellow(),
        "help".bright_yellow()
    );

    loop {
        match rl.readline("powcalc> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if execute_line(calc, line) == Flow::Quit {
                    break;
                }
            },
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C - ignore and continue
                println!("^C");
                continue;
            },
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{} {}", "Readline error:".red(), e);
                break;
            },
        }
    }

    println!("Bye!");
    Ok(())
}

fn execute_line(calc: &PowerCalculator, line: &str) -> Flow {
    match line.to_lowercase().as_str() {
        "quit" | "exit" => return Flow::Quit,
        "help" => print_help(),
        "history" => display::print_history(&calc.history_snapshot()),
        "reset" => {
            calc.history_reset();
            println!("{}", "History cleared".green());
        },
        _ => match input::parse_line(line) {
            Ok(request) => {
                let (verdict, result) = calc.evaluate_with_verdict(request);
                display::print_rendered(&display::render(&request, verdict, &result));
            },
            Err(e) => display::print_input_error(&e),
        },
    }
    Flow::Continue
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  <base> <exponent>   Calculate base raised to exponent");
    println!("  <base>^<exponent>   Same, caret form");
    println!("  history             Show calculation history");
    println!("  reset               Clear calculation history");
    println!("  help                Show this help");
    println!("  quit | exit         Leave (Ctrl+D also works)");
}

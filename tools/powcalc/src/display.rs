//! Rendering of calculation results for the terminal

use colored::*;
use power_calc::{CalcStatus, CalculationRequest, CalculationResult, DomainVerdict, HistoryEntry};

use crate::input::InputError;

/// Title plus explanatory message for one outcome
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub title: &'static str,
    pub message: String,
    pub is_error: bool,
}

impl Rendered {
    fn ok(message: String) -> Self {
        Self {
            title: "Result",
            message,
            is_error: false,
        }
    }

    fn error(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
            is_error: true,
        }
    }
}

/// Format a value: scientific for very small or very large magnitudes,
/// fixed with 8 decimals otherwise
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if (magnitude < 1e-8 && value != 0.0) || magnitude > 1e8 {
        format!("{:.8e}", value)
    } else {
        format!("{:.8}", value)
    }
}

/// Turn a result into user-facing text
///
/// `verdict` selects the explanation for domain errors.
pub fn render(
    request: &CalculationRequest,
    verdict: DomainVerdict,
    result: &CalculationResult,
) -> Rendered {
    match (result.status(), result.value()) {
        (CalcStatus::Success, Some(value)) => {
            Rendered::ok(format!("Result: {}", format_value(value)))
        },
        (CalcStatus::Success, None) => Rendered::error("Invalid Result", "No value was produced."),
        (CalcStatus::DomainError, _) => render_domain_error(request, verdict),
        (CalcStatus::Overflow, _) => {
            if overflows_negative(request) {
                Rendered::error(
                    "Overflow - Negative Infinity",
                    "The result is too large to represent as a finite number.\n\
                     Result: Negative Infinity\n\
                     This occurs when the calculation exceeds the maximum representable value.",
                )
            } else {
                Rendered::error(
                    "Overflow - Positive Infinity",
                    "The result is too large to represent as a finite number.\n\
                     Result: Positive Infinity\n\
                     This occurs when the calculation exceeds the maximum representable value.",
                )
            }
        },
        (CalcStatus::Underflow, _) => Rendered::error(
            "Underflow",
            "The result is too small to represent as a nonzero number.\n\
             This occurs when the magnitude falls below the smallest representable value.",
        ),
    }
}

fn render_domain_error(request: &CalculationRequest, verdict: DomainVerdict) -> Rendered {
    match verdict {
        DomainVerdict::RejectZeroNegativeExponent => Rendered::error(
            "Division by Zero",
            "Raising 0 to a negative power is undefined.\n\
             This would require division by zero, which is not allowed in mathematics.\n\
             Try using a positive exponent or a non-zero base.",
        ),
        DomainVerdict::RejectNegativeBaseFractionalExponent => Rendered::error(
            "Complex Number Result",
            "Negative base with fractional exponent results in complex numbers.\n\
             This calculator only handles real numbers.\n\
             Try using an integer exponent or a positive base.",
        ),
        DomainVerdict::RejectNotANumber | DomainVerdict::Proceed => Rendered::error(
            "Invalid Result",
            format!(
                "The result of {} is not a real number.\n\
                 This may be due to mathematical constraints or an indeterminate form.",
                request
            ),
        ),
    }
}

/// Negative base raised to an odd integer keeps its sign
fn overflows_negative(request: &CalculationRequest) -> bool {
    request.base < 0.0
        && request.exponent.is_finite()
        && (request.exponent.round() % 2.0).abs() == 1.0
}

pub fn print_rendered(rendered: &Rendered) {
    if rendered.is_error {
        println!("{}", format!("{}:", rendered.title).red().bold());
        for line in rendered.message.lines() {
            println!("  {}", line);
        }
    } else {
        println!("{}", rendered.message.green().bold());
    }
}

pub fn print_input_error(e: &InputError) {
    println!("{}", format!("{}:", e.title()).red().bold());
    for line in e.to_string().lines() {
        println!("  {}", line);
    }
}

pub fn print_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("{}", "(no history)".dimmed());
        return;
    }

    println!(
        "{}",
        format!(
            "{:>4}  {:<24} {:<24} {:<12} {}",
            "#", "EXPRESSION", "VALUE", "STATUS", "TIME"
        )
        .bold()
    );
    for entry in entries {
        let value = entry
            .result
            .value()
            .map(format_value)
            .unwrap_or_else(|| "-".to_string());
        let status = match entry.result.status() {
            CalcStatus::Success => entry.result.status().as_str().green(),
            _ => entry.result.status().as_str().yellow(),
        };
        println!(
            "{:>4}  {:<24} {:<24} {:<12} {}",
            entry.index,
            entry.request.to_string(),
            value,
            status,
            entry.recorded_at.format("%H:%M:%S%.3f")
        );
    }
}

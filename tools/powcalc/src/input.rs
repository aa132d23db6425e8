//! Text input parsing
//!
//! Turning text into a `CalculationRequest` is the driver's job; the engine
//! only ever sees real numbers.

use power_calc::CalculationRequest;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter both base and exponent values.")]
    Missing,

    #[error("Please enter valid numerical values for both base and exponent.\nExamples: 2.5, -3, 0.5, 1e6 (got '{0}')")]
    InvalidFormat(String),
}

impl InputError {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Missing => "Missing Input",
            Self::InvalidFormat(_) => "Invalid Input Format",
        }
    }
}

/// Parse base and exponent fields
pub fn parse_operands(base: &str, exponent: &str) -> Result<CalculationRequest, InputError> {
    let base = base.trim();
    let exponent = exponent.trim();

    if base.is_empty() || exponent.is_empty() {
        return Err(InputError::Missing);
    }

    Ok(CalculationRequest::new(
        parse_number(base)?,
        parse_number(exponent)?,
    ))
}

/// Parse one line: `2 10`, `2^10` or `2, 10`
pub fn parse_line(line: &str) -> Result<CalculationRequest, InputError> {
    let line = line.trim();

    if let Some((base, exponent)) = line.split_once('^') {
        return parse_operands(base, exponent);
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    match parts.as_slice() {
        [base, exponent] => parse_operands(base, exponent),
        [] | [_] => Err(InputError::Missing),
        _ => Err(InputError::InvalidFormat(line.to_string())),
    }
}

fn parse_number(text: &str) -> Result<f64, InputError> {
    text.parse::<f64>()
        .map_err(|_| InputError::InvalidFormat(text.to_string()))
}

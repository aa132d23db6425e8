//! Request and result types shared by the validator, engine and ledger

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `base ^ exponent` calculation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub base: f64,
    pub exponent: f64,
}

impl CalculationRequest {
    pub fn new(base: f64, exponent: f64) -> Self {
        Self { base, exponent }
    }
}

impl fmt::Display for CalculationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^{}", self.base, self.exponent)
    }
}

/// Outcome classification of a calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcStatus {
    /// Finite, representable value
    Success,
    /// Input combination has no real-valued result
    DomainError,
    /// Magnitude exceeds the finite f64 range
    Overflow,
    /// Nonzero magnitude rounded to zero
    Underflow,
}

impl CalcStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::DomainError => "domain_error",
            Self::Overflow => "overflow",
            Self::Underflow => "underflow",
        }
    }

    /// Whether a result with this status belongs in the history ledger
    pub fn is_recordable(&self) -> bool {
        !matches!(self, Self::DomainError)
    }
}

impl fmt::Display for CalcStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified result of a calculation
///
/// Only constructed by the engine. `value` is `Some` exactly when the status
/// is [`CalcStatus::Success`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    status: CalcStatus,
    value: Option<f64>,
}

impl CalculationResult {
    pub(crate) fn success(value: f64) -> Self {
        Self {
            status: CalcStatus::Success,
            value: Some(value),
        }
    }

    pub(crate) fn domain_error() -> Self {
        Self::non_value(CalcStatus::DomainError)
    }

    pub(crate) fn overflow() -> Self {
        Self::non_value(CalcStatus::Overflow)
    }

    pub(crate) fn underflow() -> Self {
        Self::non_value(CalcStatus::Underflow)
    }

    fn non_value(status: CalcStatus) -> Self {
        Self {
            status,
            value: None,
        }
    }

    pub fn status(&self) -> CalcStatus {
        self.status
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_success(&self) -> bool {
        self.status == CalcStatus::Success
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "{}({})", self.status, v),
            None => write!(f, "{}", self.status),
        }
    }
}

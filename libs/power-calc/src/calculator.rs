//! PowerCalculator - validate, compute, record
//!
//! The single entry point drivers are expected to use. Owns its history
//! ledger, so separate instances never share state.

use tracing::debug;

use crate::config::CalcConfig;
use crate::engine;
use crate::error::Result;
use crate::history::{HistoryEntry, HistoryLedger};
use crate::types::{CalculationRequest, CalculationResult};
use crate::validator::{classify_with_tolerance, DomainVerdict};

/// Power calculator with its own history ledger
///
/// # Example
/// ```
/// use power_calc::{CalcStatus, PowerCalculator};
///
/// let calc = PowerCalculator::new();
///
/// let result = calc.evaluate(2.0, 10.0);
/// assert_eq!(result.value(), Some(1024.0));
///
/// let rejected = calc.evaluate(0.0, -3.0);
/// assert_eq!(rejected.status(), CalcStatus::DomainError);
///
/// // only the completed calculation is recorded
/// assert_eq!(calc.history_snapshot().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct PowerCalculator {
    config: CalcConfig,
    history: HistoryLedger,
}

impl PowerCalculator {
    /// Create a calculator with default configuration and an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with a validated configuration
    pub fn with_config(config: CalcConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            history: HistoryLedger::new(),
        })
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Direct access to the ledger for read helpers such as `to_json`
    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    /// Classify a pair with this calculator's tolerance
    pub fn classify(&self, base: f64, exponent: f64) -> DomainVerdict {
        classify_with_tolerance(base, exponent, self.config.integer_tolerance)
    }

    /// Evaluate `base ^ exponent`
    ///
    /// Every input yields a result; nothing here panics or returns an error.
    pub fn evaluate(&self, base: f64, exponent: f64) -> CalculationResult {
        self.evaluate_request(CalculationRequest::new(base, exponent))
    }

    /// Evaluate a constructed request
    pub fn evaluate_request(&self, request: CalculationRequest) -> CalculationResult {
        self.evaluate_with_verdict(request).1
    }

    /// Evaluate and also return the validator's verdict, so drivers can
    /// explain a rejection without classifying the request again
    pub fn evaluate_with_verdict(
        &self,
        request: CalculationRequest,
    ) -> (DomainVerdict, CalculationResult) {
        let verdict = self.classify(request.base, request.exponent);
        if !verdict.is_proceed() {
            debug!(
                base = request.base,
                exponent = request.exponent,
                reason = verdict.reason(),
                "Request rejected"
            );
            return (verdict, CalculationResult::domain_error());
        }

        let result = engine::compute_with_tolerance(request, self.config.integer_tolerance);

        if self.config.record_history {
            self.history.record(request, result);
        }

        debug!(
            base = request.base,
            exponent = request.exponent,
            status = %result.status(),
            "Evaluated"
        );
        (verdict, result)
    }

    /// Snapshot of recorded calculations in chronological order
    pub fn history_snapshot(&self) -> Vec<HistoryEntry> {
        self.history.list()
    }

    /// Clear the history ledger
    pub fn history_reset(&self) {
        self.history.reset();
    }
}

//! power-calc - Power computation engine for the powcalc calculator
//!
//! Computes `base ^ exponent` for real operands and classifies every outcome
//! instead of failing.
//!
//! # Components
//!
//! - **Validator**: rejects inputs outside the real domain before any arithmetic
//! - **Engine**: exponentiation by squaring for integer exponents,
//!   `exp(y * ln(x))` otherwise
//! - **History**: append-only ledger of completed calculations
//!
//! # Example
//!
//! ```rust
//! use power_calc::{CalcStatus, PowerCalculator};
//!
//! let calc = PowerCalculator::new();
//!
//! assert_eq!(calc.evaluate(5.0, -2.0).value(), Some(0.04));
//! assert_eq!(calc.evaluate(-8.0, 3.0).value(), Some(-512.0));
//! assert_eq!(calc.evaluate(10.0, 1000.0).status(), CalcStatus::Overflow);
//! assert_eq!(calc.evaluate(-8.0, 0.5).status(), CalcStatus::DomainError);
//!
//! let history = calc.history_snapshot();
//! assert_eq!(history.len(), 3);
//! assert_eq!(history[2].index, 3);
//!
//! calc.history_reset();
//! assert!(calc.history_snapshot().is_empty());
//! ```
//!
//! # Outcome table
//!
//! | Input | Status |
//! |-------|--------|
//! | `0 ^ 0` | `Success(1)` |
//! | `0 ^ negative` | `DomainError` |
//! | `negative ^ fractional` | `DomainError` |
//! | NaN operand | `DomainError` |
//! | `1 ^ ±inf` | `DomainError` |
//! | magnitude beyond `f64::MAX` | `Overflow` |
//! | nonzero magnitude rounded to 0 | `Underflow` |

pub mod calculator;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod types;
pub mod validator;

// Re-exports for convenience
pub use calculator::PowerCalculator;
pub use config::CalcConfig;
pub use error::{CalcError, Result};
pub use history::{HistoryEntry, HistoryLedger};
pub use types::{CalcStatus, CalculationRequest, CalculationResult};
pub use validator::DomainVerdict;

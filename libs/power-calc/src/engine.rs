//! Power engine
//!
//! Computes `base ^ exponent` and classifies the outcome:
//! - Integer exponents: exponentiation by squaring on `round(|exponent|)`,
//!   reciprocal afterwards for negative exponents
//! - Fractional exponents: `exp(exponent * ln(base))`
//!
//! The engine re-runs domain validation itself, so calling it directly with
//! rejected input yields [`CalcStatus::DomainError`](crate::CalcStatus)
//! instead of a panic or a NaN value.

use crate::types::{CalculationRequest, CalculationResult};
use crate::validator::{classify_with_tolerance, is_integer_value, DEFAULT_INTEGER_TOLERANCE};
use tracing::{debug, trace, warn};

/// Compute with [`DEFAULT_INTEGER_TOLERANCE`]
pub fn compute(request: CalculationRequest) -> CalculationResult {
    compute_with_tolerance(request, DEFAULT_INTEGER_TOLERANCE)
}

/// Compute `request.base ^ request.exponent`
///
/// # Arguments
/// * `request` - Base and exponent
/// * `tolerance` - Distance from the nearest integer under which the exponent
///   is treated as an integer
pub fn compute_with_tolerance(request: CalculationRequest, tolerance: f64) -> CalculationResult {
    let CalculationRequest { base, exponent } = request;

    let verdict = classify_with_tolerance(base, exponent, tolerance);
    if !verdict.is_proceed() {
        warn!(
            base = base,
            exponent = exponent,
            reason = verdict.reason(),
            "Engine called with input outside the domain"
        );
        return CalculationResult::domain_error();
    }

    // 0^0 = 1 by convention
    if exponent == 0.0 {
        return CalculationResult::success(1.0);
    }

    let value = if is_integer_value(exponent, tolerance) {
        match integer_power(base, exponent) {
            Some(v) => v,
            None => {
                warn!(base = base, exponent = exponent, "Reciprocal of zero");
                return CalculationResult::domain_error();
            },
        }
    } else {
        let v = (exponent * base.ln()).exp();
        debug!(base = base, exponent = exponent, value = v, "fractional power");
        v
    };

    classify_value(base, value)
}

/// Integer-exponent path. Returns `None` only when a reciprocal of zero
/// would be taken for a zero base.
fn integer_power(base: f64, exponent: f64) -> Option<f64> {
    let magnitude = exponent.abs().round();
    let positive = pow_by_squaring(base, magnitude);

    debug!(
        base = base,
        exponent = exponent,
        positive = positive,
        "integer power"
    );

    if exponent > 0.0 {
        return Some(positive);
    }

    if positive == 0.0 && base == 0.0 {
        return None;
    }

    // The positive power overflowed but its reciprocal may still be a
    // subnormal, so square the reciprocal base instead.
    if positive.is_infinite() && base.is_finite() {
        return Some(pow_by_squaring(1.0 / base, magnitude));
    }

    // A positive power that underflowed to zero turns into ±inf here and is
    // classified as overflow.
    Some(1.0 / positive)
}

/// Exponentiation by squaring for a non-negative integer-valued `n`
///
/// `n` stays an f64 so magnitudes beyond `u64::MAX` still work: every f64
/// above 2^53 is an even integer, so halving is exact.
fn pow_by_squaring(base: f64, n: f64) -> f64 {
    let mut result = 1.0;
    let mut factor = base;
    let mut remaining = n;
    let mut steps = 0u32;

    while remaining > 0.0 {
        if remaining % 2.0 == 1.0 {
            result *= factor;
        }
        remaining = (remaining / 2.0).floor();
        if remaining > 0.0 {
            factor *= factor;
        }
        steps += 1;
    }

    trace!(base = base, n = n, steps = steps, result = result, "squaring");
    result
}

/// Map a raw f64 to a classified result
fn classify_value(base: f64, value: f64) -> CalculationResult {
    if value.is_nan() {
        // Indeterminate form, e.g. 1^inf
        warn!(base = base, "Computation produced NaN");
        CalculationResult::domain_error()
    } else if value.is_infinite() {
        CalculationResult::overflow()
    } else if value == 0.0 && base != 0.0 {
        CalculationResult::underflow()
    } else {
        CalculationResult::success(value)
    }
}

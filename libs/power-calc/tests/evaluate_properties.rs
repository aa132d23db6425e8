//! Evaluate Property Tests
//!
//! End-to-end behaviour of `PowerCalculator::evaluate`:
//! - Reference values and documented conventions
//! - Domain errors, overflow and underflow
//! - Exponent laws and idempotence
//! - History ledger invariants

#![allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable

use power_calc::{CalcStatus, PowerCalculator};

fn assert_close(actual: f64, expected: f64, rel: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= rel * scale,
        "expected {} got {}",
        expected,
        actual
    );
}

// ============================================================================
// Reference Values
// ============================================================================

#[test]
fn test_reference_values() {
    let calc = PowerCalculator::new();

    assert_eq!(calc.evaluate(2.0, 10.0).value(), Some(1024.0));
    assert_eq!(calc.evaluate(5.0, -2.0).value(), Some(0.04));
    assert_eq!(calc.evaluate(-8.0, 3.0).value(), Some(-512.0));
}

#[test]
fn test_zero_to_the_zero_is_one() {
    // Convention, not IEEE-derived
    let calc = PowerCalculator::new();
    let result = calc.evaluate(0.0, 0.0);

    assert_eq!(result.status(), CalcStatus::Success);
    assert_eq!(result.value(), Some(1.0));
}

#[test]
fn test_small_integer_powers_are_exact() {
    let calc = PowerCalculator::new();

    for b in 0..=12_i64 {
        for e in 0..=12_u32 {
            let expected = b.pow(e) as f64;
            let result = calc.evaluate(b as f64, e as f64);
            assert_eq!(result.value(), Some(expected), "{}^{}", b, e);
        }
    }
}

#[test]
fn test_large_integer_powers_within_tolerance() {
    let calc = PowerCalculator::new();

    for (b, e) in [(3.0_f64, 40.0_f64), (7.0, 30.0), (1.5, 100.0), (10.0, 300.0)] {
        let value = calc.evaluate(b, e).value().unwrap();
        assert_close(value, b.powf(e), 1e-12);
    }
}

// ============================================================================
// Domain Errors
// ============================================================================

#[test]
fn test_zero_base_negative_exponent() {
    let calc = PowerCalculator::new();
    assert_eq!(calc.evaluate(0.0, -3.0).status(), CalcStatus::DomainError);
    assert_eq!(calc.evaluate(0.0, -3.0).value(), None);
}

#[test]
fn test_negative_base_fractional_exponent() {
    let calc = PowerCalculator::new();
    assert_eq!(calc.evaluate(-8.0, 0.5).status(), CalcStatus::DomainError);
    assert_eq!(calc.evaluate(-2.0, 1.5).status(), CalcStatus::DomainError);
    assert_eq!(calc.evaluate(-4.0, 0.5).status(), CalcStatus::DomainError);
}

#[test]
fn test_nan_operands() {
    let calc = PowerCalculator::new();
    assert_eq!(calc.evaluate(f64::NAN, 2.0).status(), CalcStatus::DomainError);
    assert_eq!(calc.evaluate(f64::NAN, 0.0).status(), CalcStatus::DomainError);
    assert_eq!(calc.evaluate(0.0, f64::NAN).status(), CalcStatus::DomainError);
    assert_eq!(calc.evaluate(f64::NAN, f64::NAN).status(), CalcStatus::DomainError);
}

// ============================================================================
// Overflow / Underflow
// ============================================================================

#[test]
fn test_overflow() {
    let calc = PowerCalculator::new();
    let result = calc.evaluate(10.0, 1000.0);

    assert_eq!(result.status(), CalcStatus::Overflow);
    assert_eq!(result.value(), None);
    assert_eq!(calc.evaluate(f64::MAX, 2.0).status(), CalcStatus::Overflow);
    assert_eq!(calc.evaluate(2.0, f64::INFINITY).status(), CalcStatus::Overflow);
}

#[test]
fn test_underflow() {
    let calc = PowerCalculator::new();

    assert_eq!(calc.evaluate(10.0, -400.0).status(), CalcStatus::Underflow);
    assert_eq!(calc.evaluate(0.5, 2000.0).status(), CalcStatus::Underflow);
    assert_eq!(calc.evaluate(2.0, f64::NEG_INFINITY).status(), CalcStatus::Underflow);
}

#[test]
fn test_zero_base_positive_exponent_is_not_underflow() {
    let calc = PowerCalculator::new();
    assert_eq!(calc.evaluate(0.0, 5.0).status(), CalcStatus::Success);
    assert_eq!(calc.evaluate(0.0, 0.5).value(), Some(0.0));
}

// ============================================================================
// Mathematical Properties
// ============================================================================

#[test]
fn test_fractional_roots() {
    let calc = PowerCalculator::new();

    assert_close(calc.evaluate(4.0, 0.5).value().unwrap(), 2.0, 1e-12);
    assert_close(calc.evaluate(16.0, 0.5).value().unwrap(), 4.0, 1e-12);
    assert_close(calc.evaluate(8.0, 1.0 / 3.0).value().unwrap(), 2.0, 1e-12);
    assert_close(calc.evaluate(27.0, 1.0 / 3.0).value().unwrap(), 3.0, 1e-12);
    assert_close(calc.evaluate(4.0, 1.5).value().unwrap(), 8.0, 1e-12);
}

#[test]
fn test_exponent_laws() {
    let calc = PowerCalculator::new();
    let (x, y, z) = (2.0, 3.0, 4.0);

    // (x^y)^z = x^(y*z)
    let inner = calc.evaluate(x, y).value().unwrap();
    let left = calc.evaluate(inner, z).value().unwrap();
    let right = calc.evaluate(x, y * z).value().unwrap();
    assert_close(left, right, 1e-10);

    // x^y * x^z = x^(y+z)
    let product = calc.evaluate(x, y).value().unwrap() * calc.evaluate(x, z).value().unwrap();
    let sum = calc.evaluate(x, y + z).value().unwrap();
    assert_close(product, sum, 1e-10);

    // fractional exponents too
    let left = calc.evaluate(x, 0.3).value().unwrap() * calc.evaluate(x, 0.45).value().unwrap();
    let right = calc.evaluate(x, 0.75).value().unwrap();
    assert_close(left, right, 1e-12);
}

#[test]
fn test_evaluate_is_idempotent() {
    let calc = PowerCalculator::new();

    for (b, e) in [(2.0, 10.0), (3.7, 1.3), (-8.0, 0.5), (10.0, 1000.0), (0.5, 2000.0)] {
        let first = calc.evaluate(b, e);
        let second = calc.evaluate(b, e);
        assert_eq!(first, second, "{}^{}", b, e);
    }
}

// ============================================================================
// History Ledger
// ============================================================================

#[test]
fn test_history_indices_contiguous() {
    let calc = PowerCalculator::new();
    let inputs = [(2.0, 1.0), (2.0, 2.0), (10.0, 1000.0), (10.0, -400.0), (1.5, 0.5)];

    for (b, e) in inputs {
        calc.evaluate(b, e);
    }

    let history = calc.history_snapshot();
    assert_eq!(history.len(), inputs.len());
    for (i, entry) in history.iter().enumerate() {
        assert_eq!(entry.index, i as u64 + 1);
        assert_eq!(entry.request.base, inputs[i].0);
        assert_eq!(entry.request.exponent, inputs[i].1);
    }

    calc.history_reset();
    assert!(calc.history_snapshot().is_empty());
}

#[test]
fn test_rejected_calls_never_in_history() {
    let calc = PowerCalculator::new();

    calc.evaluate(2.0, 3.0);
    calc.evaluate(0.0, -3.0);
    calc.evaluate(3.0, 2.0);
    calc.evaluate(-8.0, 0.5);

    let history = calc.history_snapshot();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].index, 1);
    assert_eq!(history[1].index, 2);
    assert!(history
        .iter()
        .all(|e| e.result.status() != CalcStatus::DomainError));
}

#[test]
fn test_history_timestamps_non_decreasing() {
    let calc = PowerCalculator::new();
    for e in 0..10 {
        calc.evaluate(2.0, e as f64);
    }

    let history = calc.history_snapshot();
    assert!(history
        .windows(2)
        .all(|pair| pair[0].recorded_at <= pair[1].recorded_at));
}

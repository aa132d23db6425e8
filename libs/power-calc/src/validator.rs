//! Domain validation for power calculations
//!
//! Pure classification of a (base, exponent) pair before any arithmetic is
//! attempted. No state, no side effects.

/// Default tolerance when deciding whether an exponent is an integer value
pub const DEFAULT_INTEGER_TOLERANCE: f64 = 1e-9;

/// Verdict produced by [`classify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainVerdict {
    /// Input is inside the supported domain
    Proceed,
    /// `0 ^ negative` would divide by zero
    RejectZeroNegativeExponent,
    /// `negative ^ fractional` has no real result
    RejectNegativeBaseFractionalExponent,
    /// One of the operands is NaN
    RejectNotANumber,
}

impl DomainVerdict {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }

    /// Short description, used in logs
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Proceed => "within domain",
            Self::RejectZeroNegativeExponent => "zero base with negative exponent",
            Self::RejectNegativeBaseFractionalExponent => {
                "negative base with fractional exponent"
            },
            Self::RejectNotANumber => "operand is not a number",
        }
    }
}

/// Classify a pair using [`DEFAULT_INTEGER_TOLERANCE`]
///
/// # Examples
/// ```
/// use power_calc::validator::{classify, DomainVerdict};
///
/// assert_eq!(classify(2.0, 10.0), DomainVerdict::Proceed);
/// assert_eq!(classify(0.0, 0.0), DomainVerdict::Proceed);
/// assert_eq!(classify(0.0, -3.0), DomainVerdict::RejectZeroNegativeExponent);
/// assert_eq!(
///     classify(-8.0, 0.5),
///     DomainVerdict::RejectNegativeBaseFractionalExponent
/// );
/// ```
pub fn classify(base: f64, exponent: f64) -> DomainVerdict {
    classify_with_tolerance(base, exponent, DEFAULT_INTEGER_TOLERANCE)
}

/// Classify a pair against the domain rules
///
/// Rules (first match wins):
/// 1. Either operand NaN → `RejectNotANumber`
/// 2. `base == 0` and `exponent < 0` → `RejectZeroNegativeExponent`
/// 3. `base < 0` and exponent not an integer → `RejectNegativeBaseFractionalExponent`
/// 4. Otherwise → `Proceed`
///
/// `0 ^ 0` proceeds; the engine defines it as 1.
pub fn classify_with_tolerance(base: f64, exponent: f64, tolerance: f64) -> DomainVerdict {
    if base.is_nan() || exponent.is_nan() {
        return DomainVerdict::RejectNotANumber;
    }

    // -0.0 == 0.0, so both zero signs land here
    if base == 0.0 && exponent < 0.0 {
        return DomainVerdict::RejectZeroNegativeExponent;
    }

    if base < 0.0 && !is_integer_value(exponent, tolerance) {
        return DomainVerdict::RejectNegativeBaseFractionalExponent;
    }

    DomainVerdict::Proceed
}

/// Whether `x` is within `tolerance` of an integer
///
/// Infinities and NaN are never integer values. A zero tolerance accepts
/// exact integers only.
pub fn is_integer_value(x: f64, tolerance: f64) -> bool {
    if !x.is_finite() {
        return false;
    }
    let distance = (x - x.round()).abs();
    distance == 0.0 || distance < tolerance
}

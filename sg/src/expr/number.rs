//! Numeric values produced by the evaluator

use std::fmt;

/// Decimal digits kept in a fractional result
const RESULT_DIGITS: i32 = 10;

// Beyond 2^52 every f64 is already an integer, so scaling cannot change it
const EXACT_LIMIT: f64 = 4_503_599_627_370_496.0;

/// An integer or floating point value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Round a float result to 10 decimal places; integers pass through
    pub(crate) fn rounded(self) -> Number {
        match self {
            Number::Int(_) => self,
            Number::Float(f) => Number::Float(round_to(f, RESULT_DIGITS)),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// Round half to even at `digits` decimal places (negative digits round left of the point)
pub(crate) fn round_to(x: f64, digits: i32) -> f64 {
    let digits = digits.clamp(-400, 400);
    if digits < 0 {
        let factor = 10f64.powi(-digits);
        if !factor.is_finite() {
            return 0.0_f64.copysign(x);
        }
        return (x / factor).round_ties_even() * factor;
    }

    let factor = 10f64.powi(digits);
    let scaled = x * factor;
    if !scaled.is_finite() || scaled.abs() >= EXACT_LIMIT {
        return x;
    }
    scaled.round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.30000000000000004, 10), 0.3);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        assert_eq!(round_to(1234.0, -2), 1200.0);
        assert_eq!(round_to(1e300, 10), 1e300);
        assert_eq!(round_to(5.5, -500), 0.0);
    }

    #[test]
    fn test_rounded_leaves_ints() {
        assert_eq!(Number::Int(7).rounded(), Number::Int(7));
        assert_eq!(Number::Float(1.00000000001).rounded(), Number::Float(1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(20).to_string(), "20");
        assert_eq!(Number::Float(20.0).to_string(), "20.0");
        assert_eq!(Number::Float(0.25).to_string(), "0.25");
    }
}

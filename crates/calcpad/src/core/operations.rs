//! Binary arithmetic operations
//!
//! Operations follow IEEE-754 double semantics: dividing by zero produces an
//! infinity or NaN rather than failing. Only the final value of an expression
//! is checked for finiteness, so `1/(1/0)` is a legitimate `0`.

/// Binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Exponentiation (**)
    Power,
}

impl Operation {
    /// Returns the operator symbol as written in an expression
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "**",
        }
    }

    /// Applies the operation to two operands
    #[must_use]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
            Self::Power => power(a, b),
        }
    }
}

/// `a ** b` with the ECMAScript special case: a NaN exponent, or a base of
/// magnitude one raised to an infinite exponent, is NaN (`powf` returns 1).
fn power(a: f64, b: f64) -> f64 {
    if b.is_nan() || (a.abs() == 1.0 && b.is_infinite()) {
        return f64::NAN;
    }
    a.powf(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "*");
        assert_eq!(Operation::Divide.symbol(), "/");
        assert_eq!(Operation::Power.symbol(), "**");
    }

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operation::Multiply.apply(2.0, 3.0), 6.0);
        assert_eq!(Operation::Divide.apply(3.0, 2.0), 1.5);
        assert_eq!(Operation::Power.apply(2.0, 10.0), 1024.0);
    }

    #[test]
    fn test_divide_by_zero_is_ieee() {
        assert_eq!(Operation::Divide.apply(5.0, 0.0), f64::INFINITY);
        assert_eq!(Operation::Divide.apply(-5.0, 0.0), f64::NEG_INFINITY);
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_power_special_cases() {
        assert!(Operation::Power.apply(1.0, f64::INFINITY).is_nan());
        assert!(Operation::Power.apply(-1.0, f64::NEG_INFINITY).is_nan());
        assert!(Operation::Power.apply(1.0, f64::NAN).is_nan());
        assert_eq!(Operation::Power.apply(0.0, 0.0), 1.0);
        assert_eq!(Operation::Power.apply(2.0, -1.0), 0.5);
    }

    proptest! {
        #[test]
        fn prop_add_commutes(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            prop_assert_eq!(Operation::Add.apply(a, b), Operation::Add.apply(b, a));
        }

        #[test]
        fn prop_divide_by_self_is_one(a in 1e-6f64..1e9) {
            prop_assert_eq!(Operation::Divide.apply(a, a), 1.0);
        }
    }
}

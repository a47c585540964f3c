//! Quadratic surd closed forms used as match targets.

use num_integer::sqrt;
use std::fmt;

/// Number of decimal places kept for approximation values.
pub const ROUND_DIGITS: i32 = 8;

/// Round a value to a fixed number of decimal places.
#[inline]
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// A quadratic surd `(a + sqrt(b)) / c`, identified by its integer triple.
///
/// The triple itself is the identity: `Surd { 1, 5, 2 }` and
/// `Surd { 2, 20, 4 }` denote the same number but are distinct keys.
/// Ordering is lexicographic on `(a, b, c)`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Surd {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Surd {
    #[inline]
    pub const fn new(a: i64, b: i64, c: i64) -> Self {
        Surd { a, b, c }
    }

    /// Whether `sqrt(b)` is exact, making the value rational.
    #[inline]
    pub fn is_rational(&self) -> bool {
        if self.b < 0 {
            return false;
        }
        let root = sqrt(self.b);
        root * root == self.b
    }

    /// Whether the value reduces to an integer.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.is_rational() && self.c != 0 && (self.a + sqrt(self.b)) % self.c == 0
    }

    /// Numeric value rounded to [ROUND_DIGITS] decimals.
    ///
    /// Returns `None` when the triple leaves the real domain (`b < 0`)
    /// or the denominator is zero.
    pub fn eval(&self) -> Option<f64> {
        if self.b < 0 || self.c == 0 {
            return None;
        }
        let value = (self.a as f64 + (self.b as f64).sqrt()) / self.c as f64;
        Some(round_to(value, ROUND_DIGITS))
    }
}

impl fmt::Display for Surd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.c == 1 {
            write!(f, "{} + sqrt({})", self.a, self.b)
        } else {
            write!(f, "({} + sqrt({})) / {}", self.a, self.b, self.c)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_test() {
        // golden ratio
        assert_eq!(Surd::new(1, 5, 2).eval(), Some(1.61803399));
        assert_eq!(Surd::new(0, 4, 1).eval(), Some(2.0));
        assert_eq!(Surd::new(-10, 1, 10).eval(), Some(-0.9));
    }

    #[test]
    fn eval_domain_test() {
        assert_eq!(Surd::new(1, -1, 2).eval(), None);
        assert_eq!(Surd::new(1, 5, 0).eval(), None);
    }

    #[test]
    fn classification_test() {
        assert!(Surd::new(1, 4, 2).is_rational());
        assert!(!Surd::new(1, 5, 2).is_rational());
        assert!(Surd::new(0, 9, 3).is_integer());
        assert!(!Surd::new(1, 9, 3).is_integer());
    }

    #[test]
    fn round_to_test() {
        assert_eq!(round_to((1.0 + 5f64.sqrt()) / 2.0, 8), 1.61803399);
        assert_eq!(round_to(2.0, 8), 2.0);
        assert_eq!(round_to(-0.123456789, 8), -0.12345679);
    }

    #[test]
    fn fmt_test() {
        assert_eq!(format!("{}", Surd::new(1, 5, 2)), "(1 + sqrt(5)) / 2");
        assert_eq!(format!("{}", Surd::new(2, 3, 1)), "2 + sqrt(3)");
    }
}

//! Money type for Chilean pesos.
//!
//! CLP has no fractional unit, so amounts are whole-peso integers.
//! Integer representation avoids the floating-point precision issues
//! that plague monetary calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// A monetary value in whole Chilean pesos.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a new Money value from whole pesos.
    pub const fn new(pesos: i64) -> Self {
        Self(pesos)
    }

    /// Zero pesos.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw peso amount.
    pub fn amount(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Try to add, returning `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Try to subtract, returning `None` on overflow.
    pub fn checked_sub(&self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Try to multiply by a scalar, returning `None` on overflow.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// Add, saturating at the numeric bounds.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Multiply by a scalar, saturating at the numeric bounds.
    pub fn saturating_mul(&self, factor: i64) -> Money {
        Money(self.0.saturating_mul(factor))
    }

    /// Format as a display string, e.g. `$12.345`.
    ///
    /// Chilean convention: dot as thousands separator, no decimals.
    pub fn display(&self) -> String {
        let negative = self.0 < 0;
        let digits: Vec<char> = self.0.unsigned_abs().to_string().chars().collect();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
        for (i, c) in digits.iter().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(*c);
        }
        if negative {
            format!("-${}", out)
        } else {
            format!("${}", out)
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.saturating_mul(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc.saturating_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_basics() {
        let m = Money::new(4999);
        assert_eq!(m.amount(), 4999);
        assert!(m.is_positive());
        assert!(!Money::zero().is_positive());
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(10000);
        let b = Money::new(5000);
        assert_eq!((a + b).amount(), 15000);
        assert_eq!((a - b).amount(), 5000);
        assert_eq!((b * 3).amount(), 15000);
    }

    #[test]
    fn test_checked_overflow() {
        let m = Money::new(i64::MAX);
        assert_eq!(m.checked_add(Money::new(1)), None);
        assert_eq!(m.checked_mul(2), None);
        assert_eq!(Money::new(2).checked_mul(3), Some(Money::new(6)));
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::new(1000), Money::new(2500), Money::new(500)]
            .into_iter()
            .sum();
        assert_eq!(total.amount(), 4000);
    }

    #[test]
    fn test_display_thousands_grouping() {
        assert_eq!(Money::new(0).display(), "$0");
        assert_eq!(Money::new(999).display(), "$999");
        assert_eq!(Money::new(5000).display(), "$5.000");
        assert_eq!(Money::new(50000).display(), "$50.000");
        assert_eq!(Money::new(1234567).display(), "$1.234.567");
        assert_eq!(Money::new(-12345).display(), "-$12.345");
    }
}

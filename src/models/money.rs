//! Money type for presenting currency amounts
//!
//! The allocator works in full `f64` precision so repeated recomputation
//! never drifts. `Money` is the rounded, whole-unit value shown to people:
//! amounts are rounded exactly once, when they are presented.

use serde::Serialize;

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use payday::models::Money;
    /// let amount = Money::from_units(1848);
    /// assert_eq!(amount.units(), 1848);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Round a precise amount to the nearest whole unit
    ///
    /// Halves round up. Non-finite input rounds to zero.
    ///
    /// # Examples
    /// ```
    /// use payday::models::Money;
    /// assert_eq!(Money::round_from(1847.58).units(), 1848);
    /// assert_eq!(Money::round_from(2.5).units(), 3);
    /// ```
    pub fn round_from(amount: f64) -> Self {
        if amount.is_finite() {
            Self((amount + 0.5).floor() as i64)
        } else {
            Self::zero()
        }
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn units(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Format with a currency symbol and thousands separators, e.g. `₱11,000`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, group_thousands(self.0.unsigned_abs()))
        } else {
            format!("{}{}", symbol, group_thousands(self.0.unsigned_abs()))
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

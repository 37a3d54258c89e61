use crate::error::{PlanError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Number of fractional digits in currency minor units.
pub const CURRENCY_SCALE: u32 = 2;

/// A monetary value in pounds sterling.
///
/// Wraps `rust_decimal::Decimal` so fee arithmetic stays exact. Values leaving
/// the engine are rounded half-up to two decimal places with [`Money::rounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Rounds half-up (away from zero on a tie) to currency minor units and
    /// fixes the scale at two fractional digits.
    pub fn rounded(self) -> Self {
        let mut value = self
            .0
            .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(CURRENCY_SCALE);
        Self(value)
    }

    /// Splits the amount evenly over `parts`, rounded to minor units.
    ///
    /// Callers guarantee `parts >= 1`.
    pub fn split(self, parts: u32) -> Self {
        Self(self.0 / Decimal::from(parts)).rounded()
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;
    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{:.2}", self.0)
    }
}

/// A promotional reduction applied once to the tuition price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Discount {
    /// Absolute reduction in pounds.
    Amount(Decimal),
    /// Percentage reduction, `0..=100`.
    Percent(Decimal),
}

impl Discount {
    pub fn amount(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(PlanError::InvalidDiscount(
                "Discount amount must not be negative".to_string(),
            ));
        }
        Ok(Self::Amount(value))
    }

    pub fn percent(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(PlanError::InvalidDiscount(
                "Discount percentage must be between 0 and 100".to_string(),
            ));
        }
        Ok(Self::Percent(value))
    }

    /// Applies the discount to `tuition`. The result never drops below zero.
    pub fn apply(&self, tuition: Money) -> Result<Money> {
        let reduction = match *self {
            Self::Amount(value) => {
                Self::amount(value)?;
                value
            }
            Self::Percent(value) => {
                Self::percent(value)?;
                value / Decimal::ONE_HUNDRED * tuition.value()
            }
        };
        Ok(Money((tuition.value() - reduction).max(Decimal::ZERO)))
    }
}

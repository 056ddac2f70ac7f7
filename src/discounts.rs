//! Discounts
//!
//! Strategies that transform a cart total at checkout. Neither strategy validates its
//! parameter: a percentage above 100 or a fixed amount larger than the total yields a
//! negative result, and a negative percentage increases the total.

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::prices::Price;

/// Errors specific to discount calculations.
#[derive(Debug, Error, PartialEq)]
pub enum DiscountError {
    /// Percentage calculation could not be represented in minor units.
    #[error("percentage calculation overflowed")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// A policy that transforms a total amount.
pub trait Discount<'a>: fmt::Debug {
    /// Returns the discounted total.
    ///
    /// # Errors
    ///
    /// Returns a [`DiscountError`] if the arithmetic cannot be carried out in the
    /// total's currency.
    fn apply_discount(
        &self,
        total: Money<'a, Currency>,
    ) -> Result<Money<'a, Currency>, DiscountError>;

    /// Short human readable description, e.g. `10% off`.
    fn describe(&self) -> String;
}

/// Takes a percentage off the total: `total × (1 − percentage / 100)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentageDiscount {
    /// Stored as a fraction, so 10% is `0.10`.
    fraction: Decimal,
}

impl PercentageDiscount {
    /// Create a discount from percent points (`10` is 10% off).
    pub fn from_points(points: Decimal) -> Self {
        Self {
            fraction: points / Decimal::ONE_HUNDRED,
        }
    }

    /// Create a discount from a fraction (`0.1` is 10% off).
    pub fn from_fraction(fraction: Decimal) -> Self {
        Self { fraction }
    }

    /// The discount as a fractional percentage.
    pub fn percentage(&self) -> Percentage {
        Percentage::from(self.fraction)
    }

    /// The discount in percent points, or `None` if it cannot be represented.
    pub fn points(&self) -> Option<Decimal> {
        self.fraction
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|points| points.normalize())
    }
}

impl<'a> Discount<'a> for PercentageDiscount {
    fn apply_discount(
        &self,
        total: Money<'a, Currency>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        let minor = remaining_minor(self.fraction, total.to_minor_units())?;

        Ok(Money::from_minor(minor, total.currency()))
    }

    fn describe(&self) -> String {
        match self.points() {
            Some(points) => format!("{points}% off"),
            None => format!("{} off", self.fraction.normalize()),
        }
    }
}

/// Takes a fixed amount off the total. There is no floor at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAmountDiscount<'a> {
    amount: Money<'a, Currency>,
}

impl<'a> FixedAmountDiscount<'a> {
    /// Create a discount taking `amount` off the total.
    pub fn new(amount: Money<'a, Currency>) -> Self {
        Self { amount }
    }

    /// The amount taken off.
    pub fn amount(&self) -> Money<'a, Currency> {
        self.amount
    }
}

impl<'a> Discount<'a> for FixedAmountDiscount<'a> {
    fn apply_discount(
        &self,
        total: Money<'a, Currency>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        Ok(total.sub(self.amount)?)
    }

    fn describe(&self) -> String {
        format!("{} off", Price::new(self.amount))
    }
}

/// Minor units left after taking `fraction` off `minor`, rounded half away from zero.
fn remaining_minor(fraction: Decimal, minor: i64) -> Result<i64, DiscountError> {
    let Some(factor) = Decimal::ONE.checked_sub(fraction) else {
        return Err(DiscountError::PercentConversion);
    };

    let Some(applied) = Decimal::from(minor).checked_mul(factor) else {
        return Err(DiscountError::PercentConversion);
    };

    applied
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}

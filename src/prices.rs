//! Prices
//!
//! Plain-text rendering of money amounts for cart listings and receipts.

use std::fmt;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

/// A money amount rendered as `{symbol}{amount}`.
///
/// The amount always carries exactly the currency's minor-unit digits, no thousands
/// separators are inserted and a negative sign follows the symbol (`$-5.00`).
#[derive(Debug, Clone, Copy)]
pub struct Price<'a> {
    money: Money<'a, Currency>,
}

impl<'a> Price<'a> {
    /// Wraps a money amount for display.
    pub fn new(money: Money<'a, Currency>) -> Self {
        Price { money }
    }

    /// The amount as a decimal in major units.
    pub fn amount(&self) -> Decimal {
        Decimal::new(self.money.to_minor_units(), self.money.currency().exponent)
    }
}

impl<'a> From<Money<'a, Currency>> for Price<'a> {
    fn from(money: Money<'a, Currency>) -> Self {
        Price::new(money)
    }
}

impl fmt::Display for Price<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.money.currency().symbol, self.amount())
    }
}

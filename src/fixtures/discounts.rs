//! Discount Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    discounts::{Discount, FixedAmountDiscount, PercentageDiscount},
    fixtures::{FixtureError, products::parse_money},
};

/// Discount Fixture
///
/// ```yaml
/// discount:
///   type: percentage
///   value: "10%"
/// ```
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountFixture {
    /// Percentage off the total ("10%" or "0.10")
    Percentage {
        /// Percentage value
        value: String,
    },

    /// Fixed amount off the total ("5.00 USD")
    FixedAmount {
        /// Amount taken off
        amount: String,
    },
}

impl DiscountFixture {
    /// Build the discount strategy this fixture describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the percentage or amount cannot be parsed.
    pub fn try_into_discount(self) -> Result<Box<dyn Discount<'static>>, FixtureError> {
        match self {
            DiscountFixture::Percentage { value } => Ok(Box::new(parse_percentage(&value)?)),
            DiscountFixture::FixedAmount { amount } => {
                Ok(Box::new(FixedAmountDiscount::new(parse_money(&amount)?)))
            }
        }
    }
}

/// Parse percentage string (e.g., "15%" or "0.15") into a `PercentageDiscount`
///
/// Accepts two formats:
/// - Percentage format: "15%" for 15%
/// - Decimal format: "0.15" for 15%
///
/// Values are not range checked, so "150%" and "-10%" are accepted.
///
/// # Errors
///
/// Returns an error if the string cannot be parsed.
pub fn parse_percentage(s: &str) -> Result<PercentageDiscount, FixtureError> {
    let trimmed = s.trim();

    if let Some(percent_str) = trimmed.strip_suffix('%') {
        let points = percent_str
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

        Ok(PercentageDiscount::from_points(points))
    } else {
        let fraction = trimmed
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

        Ok(PercentageDiscount::from_fraction(fraction))
    }
}

/// Parse a discount given on the command line.
///
/// `none` means no discount, "AMOUNT CURRENCY" is a fixed amount and anything else
/// is read as a percentage.
///
/// # Errors
///
/// Returns an error if the discount cannot be parsed.
pub fn parse_discount(s: &str) -> Result<Option<Box<dyn Discount<'static>>>, FixtureError> {
    let trimmed = s.trim();

    if trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    if trimmed.contains(char::is_whitespace) {
        return Ok(Some(Box::new(FixedAmountDiscount::new(parse_money(
            trimmed,
        )?))));
    }

    Ok(Some(Box::new(parse_percentage(trimmed)?)))
}

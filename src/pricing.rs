//! Pricing

use rusty_money::{Money, MoneyError, iso};
use thiserror::Error;

use crate::products::Product;

/// Errors that can occur while calculating a total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// Unit price multiplied by quantity does not fit in minor units.
    #[error("line total for product {0} overflows")]
    Overflow(u64),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates unit price × quantity for a single product.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: the product of price and quantity overflows.
pub fn line_total<'a>(product: &Product<'a>) -> Result<Money<'a, iso::Currency>, TotalPriceError> {
    let minor = product
        .unit_price
        .to_minor_units()
        .checked_mul(i64::from(product.quantity))
        .ok_or(TotalPriceError::Overflow(product.id))?;

    Ok(Money::from_minor(minor, product.unit_price.currency()))
}

/// Calculates the total price of a list of products.
///
/// An empty list totals zero in `currency`.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: a line total overflows.
/// - [`TotalPriceError::Money`]: a product is priced in a different currency.
pub fn total_price<'a>(
    products: &[Product<'a>],
    currency: &'a iso::Currency,
) -> Result<Money<'a, iso::Currency>, TotalPriceError> {
    products
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, product| {
            Ok(acc.add(line_total(product)?)?)
        })
}

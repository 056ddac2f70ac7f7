//! Receipt

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{cart::Cart, prices::Price};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error, PartialEq)]
pub enum ReceiptError {
    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Final receipt for a checked-out cart.
///
/// The receipt owns the cart that was checked out, so its contents stay observable after
/// the user has moved on to a fresh cart.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    /// The cart as it was at checkout
    cart: Cart<'a>,

    /// Total cost before any discount
    subtotal: Money<'a, Currency>,

    /// Total amount due after the discount, if any
    total: Money<'a, Currency>,

    /// Description of the applied discount
    discount: Option<String>,
}

impl<'a> Receipt<'a> {
    /// Create a new receipt with the given details.
    #[must_use]
    pub fn new(
        cart: Cart<'a>,
        subtotal: Money<'a, Currency>,
        total: Money<'a, Currency>,
        discount: Option<String>,
    ) -> Self {
        Self {
            cart,
            subtotal,
            total,
            discount,
        }
    }

    /// Total cost before any discount
    #[must_use]
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Total amount due
    #[must_use]
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// The checked-out cart.
    #[must_use]
    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// Description of the applied discount, if one was applied.
    #[must_use]
    pub fn discount(&self) -> Option<&str> {
        self.discount.as_deref()
    }

    /// Whether a discount was applied at checkout.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.discount.is_some()
    }

    /// Calculate the savings made by the discount.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError::Money`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, ReceiptError> {
        Ok(self.subtotal.sub(self.total)?)
    }

    /// Calculates the savings made by the discount as a percentage of the subtotal.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError::Money`] if the subtraction operation fails.
    pub fn savings_percent(&self) -> Result<Percentage, ReceiptError> {
        let savings_minor = self.savings()?.to_minor_units();
        let subtotal_minor = self.subtotal.to_minor_units();

        if subtotal_minor == 0 {
            return Ok(Percentage::from(Decimal::ZERO));
        }

        Ok(Percentage::from(
            Decimal::from(savings_minor) / Decimal::from(subtotal_minor),
        ))
    }

    /// Writes the checkout totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        writeln!(out, "Total before discount: {}", Price::new(self.subtotal))
            .map_err(|_err| ReceiptError::IO)?;

        if self.is_discounted() {
            writeln!(out, "Total after discount: {}", Price::new(self.total))
        } else {
            writeln!(out, "Total: {}", Price::new(self.subtotal))
        }
        .map_err(|_err| ReceiptError::IO)
    }
}

//! Users
//!
//! A user owns exactly one cart and is the only place a cart is checked out.

use std::mem;

use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    cart::{Cart, CartError, Removal},
    discounts::Discount,
    prices::Price,
    pricing::TotalPriceError,
    products::{Product, ProductId},
    receipt::Receipt,
};

/// User identifier.
pub type UserId = u64;

/// Errors that can occur during checkout. The user's cart is untouched when one is returned.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Error calculating the pre-discount total.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// Error applying the discount.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// A shopper and the cart they own.
#[derive(Debug)]
pub struct User<'a> {
    /// User identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    cart: Cart<'a>,
}

impl<'a> User<'a> {
    /// Create a user owning the given cart.
    pub fn new(id: UserId, name: impl Into<String>, cart: Cart<'a>) -> Self {
        Self {
            id,
            name: name.into(),
            cart,
        }
    }

    /// The user's current cart.
    pub fn cart(&self) -> &Cart<'a> {
        &self.cart
    }

    /// Add a product to the user's cart.
    pub fn add_to_cart(&mut self, product: Product<'a>) {
        self.cart.add_product(product);
    }

    /// Remove the first product with the given id from the user's cart.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Removal<'a> {
        self.cart.remove_product(product_id)
    }

    /// Set the quantity of a product in the user's cart.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        self.cart.update_quantity(product_id, quantity)
    }

    /// Check out the current cart.
    ///
    /// The totals are computed first; the user's cart is then replaced with a brand-new
    /// empty cart in the same currency, and the previous cart moves into the returned
    /// [`Receipt`].
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] if the totals cannot be calculated, in which case the
    /// cart is left as it was.
    #[instrument(skip(self, discount), fields(user_id = self.id, items = self.cart.len()))]
    pub fn checkout(
        &mut self,
        discount: Option<&dyn Discount<'a>>,
    ) -> Result<Receipt<'a>, CheckoutError> {
        let subtotal = self.cart.calculate_total()?;

        info!(subtotal = %Price::new(subtotal), "Total before discount");

        let (total, description) = match discount {
            Some(discount) => {
                let total = self.cart.apply_discount(discount)?;

                info!(
                    total = %Price::new(total),
                    discount = %discount.describe(),
                    "Total after discount"
                );

                (total, Some(discount.describe()))
            }
            None => (subtotal, None),
        };

        let fresh = Cart::new(self.cart.currency());
        let checked_out = mem::replace(&mut self.cart, fresh);

        Ok(Receipt::new(checked_out, subtotal, total, description))
    }
}

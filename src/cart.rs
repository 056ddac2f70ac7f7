//! Cart

use std::{fmt, io};

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;
use tracing::debug;

use crate::{
    discounts::{Discount, DiscountError},
    prices::Price,
    pricing::{TotalPriceError, line_total, total_price},
    products::{Product, ProductId, ProductKind},
};

/// Errors related to cart construction, totals and output.
#[derive(Debug, Error)]
pub enum CartError {
    /// A product's currency differs from the cart currency (index, product currency, cart currency).
    #[error("Product {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// Error calculating the cart total.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// Error applying a discount to the cart total.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Outcome of removing a product from a cart.
#[derive(Debug, Clone, PartialEq)]
pub enum Removal<'a> {
    /// The first product with a matching id was removed.
    Removed(Product<'a>),

    /// No product had the requested id; the cart is unchanged.
    NotFound(ProductId),
}

impl Removal<'_> {
    /// Whether a product was removed.
    pub fn is_removed(&self) -> bool {
        matches!(self, Removal::Removed(_))
    }

    /// The id that was asked for.
    pub fn product_id(&self) -> ProductId {
        match self {
            Removal::Removed(product) => product.id,
            Removal::NotFound(id) => *id,
        }
    }
}

impl fmt::Display for Removal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Removal::Removed(product) => write!(f, "Product {} removed.", product.id),
            Removal::NotFound(_) => f.write_str("Product not found."),
        }
    }
}

/// An ordered collection of line items. Insertion order is display order.
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    products: Vec<Product<'a>>,
    currency: &'a Currency,
}

impl<'a> Cart<'a> {
    /// Create a new, empty cart.
    pub fn new(currency: &'a Currency) -> Self {
        Cart {
            products: Vec::new(),
            currency,
        }
    }

    /// Create a new cart with the given products.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if a product is priced in a different currency.
    pub fn with_products(
        products: impl Into<Vec<Product<'a>>>,
        currency: &'a Currency,
    ) -> Result<Self, CartError> {
        let products = products.into();

        products.iter().enumerate().try_for_each(|(i, product)| {
            let product_currency = product.unit_price.currency();
            if product_currency == currency {
                Ok(())
            } else {
                Err(CartError::CurrencyMismatch(
                    i,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ))
            }
        })?;

        Ok(Cart { products, currency })
    }

    /// Append a product to the end of the cart.
    pub fn add_product(&mut self, product: Product<'a>) {
        debug!(product_id = product.id, name = %product.name, "Adding product to cart");

        self.products.push(product);
    }

    /// Remove the first product with the given id.
    pub fn remove_product(&mut self, product_id: ProductId) -> Removal<'a> {
        let Some(idx) = self.products.iter().position(|p| p.id == product_id) else {
            debug!(product_id, "Product not in cart");

            return Removal::NotFound(product_id);
        };

        debug!(product_id, position = idx, "Removing product from cart");

        Removal::Removed(self.products.remove(idx))
    }

    /// Set the quantity of the first product with the given id.
    ///
    /// Returns `false` if no product matched.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        match self.products.iter_mut().find(|p| p.id == product_id) {
            Some(product) => {
                debug!(product_id, quantity, "Updating product quantity");
                product.update_quantity(quantity);
                true
            }
            None => false,
        }
    }

    /// The first product with the given id.
    pub fn get(&self, product_id: ProductId) -> Option<&Product<'a>> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Sum of unit price × quantity over all products. Zero for an empty cart.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if there was a money arithmetic or currency mismatch error.
    pub fn calculate_total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        total_price(&self.products, self.currency)
    }

    /// Run the cart total through a discount strategy. The cart itself is not changed.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if the total cannot be calculated or the discount fails.
    pub fn apply_discount(
        &self,
        discount: &dyn Discount<'a>,
    ) -> Result<Money<'a, Currency>, CartError> {
        let total = self.calculate_total()?;

        Ok(discount.apply_discount(total)?)
    }

    /// Writes the cart listing, one product description per line.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), CartError> {
        if self.is_empty() {
            return writeln!(out, "Your cart is empty.").map_err(|_err| CartError::IO);
        }

        writeln!(out, "Items in your cart:").map_err(|_err| CartError::IO)?;

        for product in &self.products {
            writeln!(out, "{}", product.product_info()).map_err(|_err| CartError::IO)?;
        }

        Ok(())
    }

    /// Writes the cart as a table of line items with their line totals.
    ///
    /// # Errors
    ///
    /// Returns an error if a line total overflows or the table cannot be written.
    pub fn write_table(&self, mut out: impl io::Write) -> Result<(), CartError> {
        let mut builder = Builder::default();

        builder.push_record(["ID", "Item", "Type", "Qty", "Unit Price", "Line Total"]);

        for product in &self.products {
            builder.push_record([
                product.id.to_string(),
                product.name.clone(),
                kind_label(&product.kind).to_string(),
                product.quantity.to_string(),
                Price::new(product.unit_price).to_string(),
                Price::new(line_total(product)?).to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(3..6), Alignment::right());

        writeln!(out, "{table}").map_err(|_err| CartError::IO)
    }

    /// Iterate over the products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products.iter()
    }

    /// Get the number of products in the cart.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }
}

fn kind_label(kind: &ProductKind<'_>) -> &'static str {
    match kind {
        ProductKind::Standard => "Standard",
        ProductKind::Digital(_) => "Digital",
        ProductKind::Physical(_) => "Physical",
    }
}

//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, Removal},
    discounts::{Discount, DiscountError, FixedAmountDiscount, PercentageDiscount},
    fixtures::{Fixture, FixtureError},
    prices::Price,
    pricing::TotalPriceError,
    products::{DigitalDetails, PhysicalDetails, Product, ProductId, ProductKind},
    receipt::{Receipt, ReceiptError},
    users::{CheckoutError, User, UserId},
};

//! Trolley
//!
//! Trolley is a small shopping cart library: product line items, a cart that totals them,
//! discount strategies applied at checkout and a user who owns one cart at a time.
//!
//! ```
//! use rust_decimal::Decimal;
//! use rusty_money::{Money, iso::USD};
//! use trolley::prelude::*;
//!
//! let mut user = User::new(1, "Alice", Cart::new(USD));
//!
//! user.add_to_cart(Product::digital(
//!     1, "Ebook", Money::from_minor(1500, USD), 1, 5.0, "www.ebookdownloadlink.com",
//! ));
//! user.add_to_cart(Product::physical(
//!     2, "Smartphone", Money::from_minor(50000, USD), 1, 0.2, "10x5x2 cm",
//!     Money::from_minor(1000, USD),
//! ));
//!
//! let discount = PercentageDiscount::from_points(Decimal::from(10));
//! let receipt = user.checkout(Some(&discount))?;
//!
//! assert_eq!(receipt.total(), Money::from_minor(46350, USD));
//! assert!(user.cart().is_empty());
//! # Ok::<(), trolley::users::CheckoutError>(())
//! ```

pub mod cart;
pub mod config;
pub mod discounts;
pub mod fixtures;
pub mod observability;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod users;

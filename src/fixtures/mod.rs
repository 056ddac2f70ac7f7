//! Fixtures
//!
//! A fixture set is a single YAML file describing a product catalog, a user with the
//! product keys in their cart, and an optional discount to check out with.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{Cart, CartError},
    discounts::Discount,
    fixtures::{discounts::DiscountFixture, products::ProductFixture},
    products::Product,
    users::{User, UserId},
};

pub mod discounts;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product definition is inconsistent
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// No user loaded yet
    #[error("No user loaded")]
    NoUser,

    /// Cart creation error
    #[error("Failed to create cart: {0}")]
    Cart(#[from] CartError),
}

/// A fixture set file
#[derive(Debug, Deserialize)]
pub struct FixtureSet {
    /// Map of product key -> product fixture
    pub products: FxHashMap<String, ProductFixture>,

    /// The shopper
    pub user: UserFixture,

    /// Discount to check out with
    #[serde(default)]
    pub discount: Option<DiscountFixture>,
}

/// User Fixture
#[derive(Debug, Clone, Deserialize)]
pub struct UserFixture {
    /// User identifier
    pub id: UserId,

    /// User name
    pub name: String,

    /// Product keys in cart order
    #[serde(default)]
    pub cart: Vec<String>,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Products by their fixture key
    products: FxHashMap<String, Product<'static>>,

    /// The shopper, with product keys still unresolved
    user: Option<UserFixture>,

    /// Discount to check out with
    discount: Option<Box<dyn Discount<'static>>>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: FxHashMap::default(),
            user: None,
            discount: None,
            currency: None,
        }
    }

    /// Load a fixture set from `{base_path}/{name}.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if there are currency mismatches.
    pub fn load(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join(format!("{name}.yml"));

        debug!(path = %file_path.display(), "Loading fixture set");

        let contents = fs::read_to_string(&file_path)?;

        self.load_str(&contents)
    }

    /// Load a fixture set from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, or if there are currency mismatches.
    pub fn load_str(&mut self, contents: &str) -> Result<&mut Self, FixtureError> {
        let fixture: FixtureSet = serde_norway::from_str(contents)?;

        for (key, product_fixture) in fixture.products {
            let product: Product<'static> = product_fixture.try_into()?;
            let currency = product.unit_price.currency();

            // Validate currency consistency
            if let Some(existing_currency) = self.currency {
                if existing_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                self.currency = Some(currency);
            }

            self.products.insert(key, product);
        }

        self.user = Some(fixture.user);
        self.discount = fixture
            .discount
            .map(DiscountFixture::try_into_discount)
            .transpose()?;

        Ok(self)
    }

    /// Load a fixture set by name from the default base path
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture file cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load(name)?;

        Ok(fixture)
    }

    /// Get a product by its string key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, key: &str) -> Result<&Product<'static>, FixtureError> {
        self.products
            .get(key)
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// Build the user with a cart holding the listed products, in order
    ///
    /// # Errors
    ///
    /// Returns an error if no user is loaded or a cart entry names an unknown product.
    pub fn user(&self) -> Result<User<'static>, FixtureError> {
        let user = self.user.as_ref().ok_or(FixtureError::NoUser)?;
        let currency = self.currency()?;

        let products = user
            .cart
            .iter()
            .map(|key| self.product(key).cloned())
            .collect::<Result<Vec<_>, _>>()?;

        let cart = Cart::with_products(products, currency)?;

        Ok(User::new(user.id, user.name.clone(), cart))
    }

    /// The discount to check out with, if the fixture set names one
    pub fn discount(&self) -> Option<&dyn Discount<'static>> {
        self.discount.as_deref()
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use super::*;

    const SMALL_SET: &str = "
products:
  pen:
    id: 1
    name: Pen
    price: 2.50 USD
    quantity: 2
  pad:
    id: 2
    name: Pad
    price: 5.00 USD
user:
  id: 9
  name: Bob
  cart: [pad, pen]
";

    #[test]
    fn fixture_loads_products_and_user() -> TestResult {
        let mut fixture = Fixture::new();

        fixture.load_str(SMALL_SET)?;

        assert_eq!(fixture.products.len(), 2);
        assert_eq!(fixture.product("pen")?.unit_price, Money::from_minor(250, USD));
        assert_eq!(fixture.currency()?, USD);
        assert!(fixture.discount().is_none());

        let user = fixture.user()?;
        let ids: Vec<_> = user.cart().iter().map(|p| p.id).collect();

        assert_eq!(user.id, 9);
        assert_eq!(user.name, "Bob");
        assert_eq!(ids, [2, 1]);

        Ok(())
    }

    #[test]
    fn fixture_from_set_loads_demo() -> TestResult {
        let fixture = Fixture::from_set("demo")?;

        assert_eq!(fixture.product("ebook")?.name, "Ebook");
        assert_eq!(fixture.product("smartphone")?.name, "Smartphone");
        assert!(fixture.discount().is_some());

        Ok(())
    }

    #[test]
    fn fixture_product_not_found_returns_error() {
        let fixture = Fixture::new();
        let result = fixture.product("nonexistent");

        assert!(matches!(result, Err(FixtureError::ProductNotFound(_))));
    }

    #[test]
    fn fixture_missing_file_returns_io_error() {
        let mut fixture = Fixture::new();
        let result = fixture.load("does-not-exist");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn fixture_no_user_returns_error() {
        let fixture = Fixture::new();

        assert!(matches!(fixture.user(), Err(FixtureError::NoUser)));
    }

    #[test]
    fn fixture_no_currency_returns_error() {
        let fixture = Fixture::new();

        assert!(matches!(fixture.currency(), Err(FixtureError::NoCurrency)));
    }

    #[test]
    fn fixture_unknown_cart_product_returns_error() -> TestResult {
        let mut fixture = Fixture::new();

        fixture.load_str(
            "
products:
  pen: { id: 1, name: Pen, price: 1.00 USD }
user: { id: 1, name: Ann, cart: [pen, ghost] }
",
        )?;

        assert!(matches!(
            fixture.user(),
            Err(FixtureError::ProductNotFound(key)) if key == "ghost"
        ));

        Ok(())
    }

    #[test]
    fn fixture_rejects_mixed_currencies() {
        let mut fixture = Fixture::new();

        let result = fixture.load_str(
            "
products:
  pen: { id: 1, name: Pen, price: 1.00 USD }
  tea: { id: 2, name: Tea, price: 1.00 GBP }
user: { id: 1, name: Ann }
",
        );

        assert!(matches!(result, Err(FixtureError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn fixture_loads_discount() -> TestResult {
        let mut fixture = Fixture::new();

        fixture.load_str(&format!(
            "{SMALL_SET}discount:\n  type: fixed_amount\n  amount: 1.00 USD\n"
        ))?;

        let discount = fixture.discount().ok_or("missing discount")?;

        assert_eq!(discount.describe(), "$1.00 off");

        Ok(())
    }
}

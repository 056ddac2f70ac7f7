//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::{DigitalDetails, PhysicalDetails, Product, ProductId, ProductKind},
};

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Unit price (e.g., "15.00 USD")
    pub price: String,

    /// Quantity
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Present for downloadable products
    #[serde(default)]
    pub digital: Option<DigitalFixture>,

    /// Present for shipped products
    #[serde(default)]
    pub physical: Option<PhysicalFixture>,
}

/// Digital product details in YAML
#[derive(Debug, Deserialize)]
pub struct DigitalFixture {
    /// Download size in megabytes
    pub file_size_mb: f64,

    /// Download link
    pub download_link: String,
}

/// Physical product details in YAML
#[derive(Debug, Deserialize)]
pub struct PhysicalFixture {
    /// Weight in kilograms
    pub weight_kg: f64,

    /// Package dimensions
    pub dimensions: String,

    /// Shipping cost (e.g., "10.00 USD")
    pub shipping_cost: String,
}

fn default_quantity() -> u32 {
    1
}

impl TryFrom<ProductFixture> for Product<'static> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let unit_price = parse_money(&fixture.price)?;

        let kind = match (fixture.digital, fixture.physical) {
            (None, None) => ProductKind::Standard,
            (Some(digital), None) => ProductKind::Digital(DigitalDetails {
                file_size_mb: digital.file_size_mb,
                download_link: digital.download_link,
            }),
            (None, Some(physical)) => ProductKind::Physical(PhysicalDetails {
                weight_kg: physical.weight_kg,
                dimensions: physical.dimensions,
                shipping_cost: parse_money(&physical.shipping_cost)?,
            }),
            (Some(_), Some(_)) => {
                return Err(FixtureError::InvalidProduct(format!(
                    "product {} cannot be both digital and physical",
                    fixture.id
                )));
            }
        };

        Ok(Product {
            id: fixture.id,
            name: fixture.name,
            unit_price,
            quantity: fixture.quantity,
            kind,
        })
    }
}

/// Parse price string (e.g., "2.99 GBP") into money.
///
/// # Errors
///
/// Returns an error if the price cannot be parsed.
pub fn parse_money(s: &str) -> Result<Money<'static, Currency>, FixtureError> {
    let (minor_units, currency) = parse_price(s)?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::from(10_i64.pow(currency.exponent)))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn fixture(yaml: &str) -> Result<ProductFixture, serde_norway::Error> {
        serde_norway::from_str(yaml)
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99USD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_rejects_bad_amount() {
        let result = parse_price("lots USD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_accepts_known_currencies() -> Result<(), FixtureError> {
        let (usd_minor, usd) = parse_price("15.00 USD")?;
        let (gbp_minor, gbp) = parse_price("2.99 GBP")?;
        let (eur_minor, eur) = parse_price("2.5 EUR")?;

        assert_eq!(usd_minor, 1500);
        assert_eq!(usd, USD);
        assert_eq!(gbp_minor, 299);
        assert_eq!(gbp, GBP);
        assert_eq!(eur_minor, 250);
        assert_eq!(eur, EUR);

        Ok(())
    }

    #[test]
    fn parse_price_accepts_negative_amounts() -> Result<(), FixtureError> {
        assert_eq!(parse_price("-3.00 USD")?, (-300, USD));

        Ok(())
    }

    #[test]
    fn standard_product_from_fixture() -> TestResult {
        let product = Product::try_from(fixture("id: 7\nname: Mug\nprice: 8.99 USD\n")?)?;

        assert_eq!(product.id, 7);
        assert_eq!(product.quantity, 1);
        assert_eq!(product.unit_price, Money::from_minor(899, USD));
        assert_eq!(product.kind, ProductKind::Standard);

        Ok(())
    }

    #[test]
    fn physical_product_from_fixture() -> TestResult {
        let product = Product::try_from(fixture(
            "id: 2\n\
             name: Smartphone\n\
             price: 500.00 USD\n\
             quantity: 1\n\
             physical:\n  \
               weight_kg: 0.2\n  \
               dimensions: 10x5x2 cm\n  \
               shipping_cost: 10.00 USD\n",
        )?)?;

        assert!(matches!(
            &product.kind,
            ProductKind::Physical(details) if details.shipping_cost == Money::from_minor(1000, USD)
        ));

        Ok(())
    }

    #[test]
    fn product_cannot_be_digital_and_physical() -> TestResult {
        let result = Product::try_from(fixture(
            "id: 3\n\
             name: Both\n\
             price: 1.00 USD\n\
             digital:\n  \
               file_size_mb: 1\n  \
               download_link: example.com\n\
             physical:\n  \
               weight_kg: 1\n  \
               dimensions: 1x1x1 cm\n  \
               shipping_cost: 1.00 USD\n",
        )?);

        assert!(matches!(result, Err(FixtureError::InvalidProduct(_))));

        Ok(())
    }
}

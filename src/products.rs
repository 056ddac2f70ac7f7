//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};

use crate::prices::Price;

/// Product identifier. Unique within a cart by convention only.
pub type ProductId = u64;

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Price of a single unit
    pub unit_price: Money<'a, Currency>,

    /// Number of units
    pub quantity: u32,

    /// Variant-specific details
    pub kind: ProductKind<'a>,
}

/// What sort of product this is, with the fields only that sort carries.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductKind<'a> {
    /// A plain product with no extra details.
    Standard,

    /// A downloadable product.
    Digital(DigitalDetails),

    /// A product that has to be shipped.
    Physical(PhysicalDetails<'a>),
}

/// Details of a downloadable product.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitalDetails {
    /// Download size in megabytes
    pub file_size_mb: f64,

    /// Where the file can be fetched from
    pub download_link: String,
}

/// Details of a shipped product.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalDetails<'a> {
    /// Shipping weight in kilograms
    pub weight_kg: f64,

    /// Free-form package dimensions (e.g. "10x5x2 cm")
    pub dimensions: String,

    /// Shipping cost. Descriptive only, never part of cart totals.
    pub shipping_cost: Money<'a, Currency>,
}

impl<'a> Product<'a> {
    /// Create a standard product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money<'a, Currency>,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            quantity,
            kind: ProductKind::Standard,
        }
    }

    /// Create a digital product.
    pub fn digital(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money<'a, Currency>,
        quantity: u32,
        file_size_mb: f64,
        download_link: impl Into<String>,
    ) -> Self {
        Self {
            kind: ProductKind::Digital(DigitalDetails {
                file_size_mb,
                download_link: download_link.into(),
            }),
            ..Self::new(id, name, unit_price, quantity)
        }
    }

    /// Create a physical product.
    pub fn physical(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Money<'a, Currency>,
        quantity: u32,
        weight_kg: f64,
        dimensions: impl Into<String>,
        shipping_cost: Money<'a, Currency>,
    ) -> Self {
        Self {
            kind: ProductKind::Physical(PhysicalDetails {
                weight_kg,
                dimensions: dimensions.into(),
                shipping_cost,
            }),
            ..Self::new(id, name, unit_price, quantity)
        }
    }

    /// Replace the quantity. No bounds are checked.
    pub fn update_quantity(&mut self, new_quantity: u32) {
        self.quantity = new_quantity;
    }

    /// One-line description of the product.
    ///
    /// Variants extend the base description rather than replacing it, so every
    /// description starts with `Product ID: .., Name: .., Quantity: ..`.
    pub fn product_info(&self) -> String {
        let base = self.base_info();

        match &self.kind {
            ProductKind::Standard => base,
            ProductKind::Digital(details) => format!(
                "{base}, File size: {} MB, Download link: {}",
                details.file_size_mb, details.download_link
            ),
            ProductKind::Physical(details) => format!(
                "{base}, Weight: {} kg, Dimensions: {}, Shipping cost: {}",
                details.weight_kg,
                details.dimensions,
                Price::new(details.shipping_cost)
            ),
        }
    }

    fn base_info(&self) -> String {
        format!(
            "Product ID: {}, Name: {}, Quantity: {}",
            self.id, self.name, self.quantity
        )
    }
}

impl fmt::Display for Product<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.product_info())
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;

    use super::*;

    fn ebook<'a>() -> Product<'a> {
        Product::digital(
            1,
            "Ebook",
            Money::from_minor(1500, USD),
            1,
            5.0,
            "www.ebookdownloadlink.com",
        )
    }

    fn smartphone<'a>() -> Product<'a> {
        Product::physical(
            2,
            "Smartphone",
            Money::from_minor(50000, USD),
            1,
            0.2,
            "10x5x2 cm",
            Money::from_minor(1000, USD),
        )
    }

    #[test]
    fn standard_product_info_is_base_description() {
        let product = Product::new(7, "Mug", Money::from_minor(899, USD), 3);

        assert_eq!(
            product.product_info(),
            "Product ID: 7, Name: Mug, Quantity: 3"
        );
    }

    #[test]
    fn digital_product_info_extends_base() {
        let info = ebook().product_info();

        assert_eq!(
            info,
            "Product ID: 1, Name: Ebook, Quantity: 1, File size: 5 MB, Download link: www.ebookdownloadlink.com"
        );

        let file_size = info.find("File size").unwrap_or(usize::MAX);
        let download_link = info.find("Download link").unwrap_or(0);

        assert!(info.starts_with("Product ID: 1"));
        assert!(file_size < download_link);
    }

    #[test]
    fn physical_product_info_extends_base() {
        assert_eq!(
            smartphone().product_info(),
            "Product ID: 2, Name: Smartphone, Quantity: 1, Weight: 0.2 kg, Dimensions: 10x5x2 cm, Shipping cost: $10.00"
        );
    }

    #[test]
    fn update_quantity_replaces_quantity() {
        let mut product = ebook();

        product.update_quantity(4);

        assert_eq!(product.quantity, 4);
        assert!(product.product_info().contains("Quantity: 4"));
    }

    #[test]
    fn update_quantity_accepts_zero() {
        let mut product = smartphone();

        product.update_quantity(0);

        assert_eq!(product.quantity, 0);
    }

    #[test]
    fn display_matches_product_info() {
        let product = smartphone();

        assert_eq!(product.to_string(), product.product_info());
    }
}

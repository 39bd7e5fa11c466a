//! Plain data records describing the catalog, its variants, and reviews.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// Identifier of a purchasable variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(u32);

impl VariantId {
    /// Wraps a raw variant identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One purchasable configuration of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Variant identifier pushed into the cart.
    pub id: VariantId,
    /// Swatch colour as a `#RRGGBB` hex string.
    pub color: String,
    /// Path of the variant image asset.
    pub image: String,
    /// Units in stock; zero means out of stock.
    pub quantity: u32,
}

impl Variant {
    /// Returns true when at least one unit is available.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Parses the swatch colour into RGB components.
    ///
    /// Returns `None` when the colour is not a `#RRGGBB` string.
    #[must_use]
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        };
        Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Star rating attached to a review, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating.
    pub const MAX: u8 = 5;

    /// Options offered by the review form, highest first.
    pub const CHOICES: [Self; 5] = [Self(5), Self(4), Self(3), Self(2), Self(1)];

    /// Creates a rating, rejecting values outside `1..=5`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRating`] when `value` is out of range.
    pub const fn new(value: u8) -> Result<Self, CatalogError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(CatalogError::InvalidRating { value });
        }
        Ok(Self(value))
    }

    /// Returns the numeric rating.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product review submitted through the review form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer name.
    pub name: String,
    /// Free-form review text.
    pub review: String,
    /// Star rating.
    pub rating: Rating,
}

/// Static catalog record for the product on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Brand name shown before the product name.
    pub brand: String,
    /// Product name.
    pub product: String,
    /// One-line product description.
    pub description: String,
    /// Alternative text for the product image.
    pub alt_text: String,
    /// Whether the product is currently on sale.
    pub on_sale: bool,
    /// Bullet points shown in the details pane.
    pub details: Vec<String>,
    /// Purchasable variants, in swatch order.
    pub variants: Vec<Variant>,
    /// Available sizes.
    pub sizes: Vec<String>,
}

impl Catalog {
    /// Returns the sock catalog shown by the demo page.
    #[must_use]
    pub fn socks() -> Self {
        Self {
            brand: "Vue Mastery".to_owned(),
            product: "Socks".to_owned(),
            description: "A pair of warm, fuzzy socks.".to_owned(),
            alt_text: "A pair of socks.".to_owned(),
            on_sale: true,
            details: vec![
                "80% cotton".to_owned(),
                "20% polyester".to_owned(),
                "Gender-neutral".to_owned(),
            ],
            variants: vec![
                Variant {
                    id: VariantId::new(2234),
                    color: "#2D985F".to_owned(),
                    image: "./assets/vmSocks-green-onWhite.jpg".to_owned(),
                    quantity: 8,
                },
                Variant {
                    id: VariantId::new(2235),
                    color: "#546B84".to_owned(),
                    image: "./assets/vmSocks-blue-onWhite.jpg".to_owned(),
                    quantity: 10,
                },
            ],
            sizes: vec!["S".to_owned(), "M".to_owned(), "L".to_owned()],
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::socks()
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Price
// ============================================================================

/// Product price.
///
/// The backend stores prices as `NUMERIC`, which may reach the client either
/// as a JSON number or as a decimal string (`"19.90"`). Both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "RawPrice", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Self {
        Self(value)
    }
}

impl From<Price> for f64 {
    fn from(p: Price) -> Self {
        p.0
    }
}

/// Formats without trailing zeros: `20` stays `20`, `19.5` stays `19.5`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

impl TryFrom<RawPrice> for Price {
    type Error = String;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        match raw {
            RawPrice::Number(n) => Ok(Price(n)),
            RawPrice::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Price)
                .map_err(|e| format!("Invalid price '{}': {}", s, e)),
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Product as returned by `GET /products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Price,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Image path, ignoring empty strings
    pub fn image_path(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|p| !p.trim().is_empty())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Multipart field names accepted by `POST /add-product`
pub mod form_fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const PRICE: &str = "price";
    pub const CATEGORY: &str = "category";
    pub const IMAGE: &str = "image";
}

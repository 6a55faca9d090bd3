use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field names owned by the fixed product fields, including input aliases.
/// Extra attributes may never use one of these, in any letter case.
pub const RESERVED_NAMES: &[&str] = &["nombre", "precio", "stock", "name", "price"];

/// Returns true if `name` collides with a fixed product field
pub fn is_reserved(name: &str) -> bool {
    let name = name.trim();
    RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

/// One catalog entry.
///
/// On the wire (seed file and persisted snapshot) a product is a flat JSON
/// object: `nombre`, `precio`, `stock`, and every extra attribute as a
/// further top-level key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: u64,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, stock: u64) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter, mostly for fixtures
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Case-insensitive substring match on the product name.
    /// `needle` must already be lowercased.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// Product as it appears in JSON, before the invariants are checked
#[derive(Deserialize)]
struct RawProduct {
    #[serde(rename = "nombre", alias = "name")]
    name: String,
    #[serde(rename = "precio", alias = "price")]
    price: f64,
    stock: u64,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl TryFrom<RawProduct> for Product {
    type Error = ValidationError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        if raw.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !raw.price.is_finite() || raw.price < 0.0 {
            return Err(ValidationError::InvalidPrice(raw.price.to_string()));
        }

        let mut attributes = BTreeMap::new();
        for (key, value) in raw.extra {
            if is_reserved(&key) {
                return Err(ValidationError::ReservedAttribute(key));
            }
            let value = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return Err(ValidationError::InvalidAttribute(key)),
            };
            attributes.insert(key, value);
        }

        Ok(Self {
            name: raw.name,
            price: raw.price,
            stock: raw.stock,
            attributes,
        })
    }
}

/// Required fields exactly as the user typed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl ProductFields {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        stock: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            stock: stock.into(),
        }
    }
}

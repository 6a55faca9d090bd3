//! Field parsing for user-entered product data.
//!
//! Pure functions that turn raw form input into typed product fields.
//! Nothing here touches the catalog.

use log::{debug, warn};
use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::models::{is_reserved, Product, ProductFields};

/// Trims the name and rejects it if nothing is left.
pub fn parse_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        warn!("Rejected empty product name");
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

/// Parses a price string, accepting both comma and dot as decimal separator.
///
/// # Returns
/// The price as f64, or an error for anything that is not a finite,
/// non-negative number.
pub fn parse_price(price_str: &str) -> Result<f64, ValidationError> {
    debug!("Parsing price string: {price_str}");
    let clean_price = price_str.trim().replace(',', ".");

    match clean_price.parse::<f64>() {
        // `-0` parses fine; store it as plain zero so it serializes as `0.0`
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value + 0.0),
        Ok(value) => {
            warn!("Price out of range: {value}");
            Err(ValidationError::InvalidPrice(price_str.to_string()))
        }
        Err(e) => {
            warn!("Failed to parse price '{price_str}': {e}");
            Err(ValidationError::InvalidPrice(price_str.to_string()))
        }
    }
}

/// Parses a stock count. Only whole, non-negative numbers are accepted.
pub fn parse_stock(stock_str: &str) -> Result<u64, ValidationError> {
    debug!("Parsing stock string: {stock_str}");
    stock_str.trim().parse::<u64>().map_err(|e| {
        warn!("Failed to parse stock '{stock_str}': {e}");
        ValidationError::InvalidStock(stock_str.to_string())
    })
}

/// Builds the attribute map from name/value pairs.
///
/// Pairs where either side is blank after trimming are skipped. A later pair
/// with the same name replaces an earlier one.
pub fn collect_attributes<I, K, V>(pairs: I) -> Result<BTreeMap<String, String>, ValidationError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut attributes = BTreeMap::new();

    for (name, value) in pairs {
        let name = name.as_ref().trim();
        let value = value.as_ref().trim();

        if name.is_empty() || value.is_empty() {
            debug!("Skipping incomplete attribute pair '{name}'='{value}'");
            continue;
        }
        if is_reserved(name) {
            warn!("Rejected reserved attribute name '{name}'");
            return Err(ValidationError::ReservedAttribute(name.to_string()));
        }

        attributes.insert(name.to_string(), value.to_string());
    }

    Ok(attributes)
}

/// Validates a complete add-product form and builds the product.
pub fn build_product<K, V>(
    fields: &ProductFields,
    attributes: &[(K, V)],
) -> Result<Product, ValidationError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let name = parse_name(&fields.name)?;
    let price = parse_price(&fields.price)?;
    let stock = parse_stock(&fields.stock)?;
    let attributes = collect_attributes(attributes.iter().map(|(k, v)| (k, v)))?;

    Ok(Product {
        name,
        price,
        stock,
        attributes,
    })
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;

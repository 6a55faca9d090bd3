//! Ordered in-memory product sequence

use crate::error::{CatalogError, Result};
use crate::models::Product;
use serde::{Deserialize, Serialize};

/// Ordered product list. Position is identity: index `i` is the `i`-th
/// product in display order, and removing an element shifts everything
/// after it down by one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a serialized snapshot (a JSON array of products)
    pub fn from_snapshot(snapshot: &str) -> serde_json::Result<Self> {
        serde_json::from_str(snapshot)
    }

    /// Serialize the full sequence. Equal catalogs always produce the same bytes.
    pub fn to_snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.products)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.products.len() {
            return Err(CatalogError::Index {
                index,
                len: self.products.len(),
            });
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&Product> {
        self.check_index(index)?;
        Ok(&self.products[index])
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Drop the last product. Used to undo a `push`.
    pub(crate) fn pop(&mut self) -> Option<Product> {
        self.products.pop()
    }

    /// Put a product back at `index`. Used to undo a `remove`.
    pub(crate) fn insert(&mut self, index: usize, product: Product) {
        let index = index.min(self.products.len());
        self.products.insert(index, product);
    }

    /// Replace the stock at `index`, returning the previous value
    pub fn set_stock(&mut self, index: usize, stock: u64) -> Result<u64> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.products[index].stock, stock))
    }

    pub fn remove(&mut self, index: usize) -> Result<Product> {
        self.check_index(index)?;
        Ok(self.products.remove(index))
    }

    /// First product whose name contains `query`, ignoring case
    pub fn find_by_name(&self, query: &str) -> Option<(usize, &Product)> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .enumerate()
            .find(|(_, product)| product.name_contains(&needle))
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;

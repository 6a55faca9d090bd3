//! Catalog store: the product list plus its persisted snapshot.
//!
//! Every mutating operation writes the full catalog back to storage before it
//! returns. If that write fails the mutation is undone, so the in-memory list
//! and the stored snapshot agree whenever control is back with the caller.

use crate::catalog::Catalog;
use crate::error::{CatalogError, LoadError, Result};
use crate::fields::{build_product, parse_stock};
use crate::models::{Product, ProductFields};
use crate::seed::SeedSource;
use crate::storage::KeyValueStore;

/// Storage key the catalog snapshot is kept under
pub const DEFAULT_STORAGE_KEY: &str = "productos";

/// Where the loaded catalog came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Snapshot,
    Seed,
}

pub struct CatalogStore<S> {
    catalog: Catalog,
    storage: S,
    key: String,
}

impl<S: KeyValueStore> CatalogStore<S> {
    /// Empty store over `storage`; call [`CatalogStore::load`] to populate it
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            catalog: Catalog::new(),
            storage,
            key: key.into(),
        }
    }

    /// Populate the catalog from the persisted snapshot, or from the seed if
    /// there is no snapshot.
    ///
    /// A snapshot is used as-is and the seed is never contacted. On failure
    /// the catalog is left empty.
    pub async fn load(&mut self, seed: &SeedSource) -> std::result::Result<LoadSource, LoadError> {
        self.catalog = Catalog::new();

        if let Some(snapshot) = self.storage.get(&self.key)? {
            let catalog = Catalog::from_snapshot(&snapshot)?;
            log::info!(
                "Restored {} products from stored snapshot '{}'",
                catalog.len(),
                self.key
            );
            self.catalog = catalog;
            return Ok(LoadSource::Snapshot);
        }

        log::info!("No stored snapshot '{}', loading seed from {}", self.key, seed);
        let products = seed.fetch().await?;
        self.catalog = Catalog::from_products(products);
        Ok(LoadSource::Seed)
    }

    /// Validate the form, append the new product and persist.
    pub fn add<K, V>(&mut self, fields: &ProductFields, attributes: &[(K, V)]) -> Result<Product>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let product = build_product(fields, attributes)?;

        self.catalog.push(product.clone());
        if let Err(e) = self.persist() {
            self.catalog.pop();
            return Err(e);
        }

        log::info!(
            "Added product '{}' at position {}",
            product.name,
            self.catalog.len() - 1
        );
        Ok(product)
    }

    /// First product whose name contains `query` (case-insensitive), with its position
    pub fn search(&self, query: &str) -> Option<(usize, &Product)> {
        let found = self.catalog.find_by_name(query);
        log::debug!(
            "Search '{}' -> {}",
            query,
            found.map_or("no match".to_string(), |(i, _)| format!("position {i}"))
        );
        found
    }

    /// Replace the stock of the product at `index` and persist.
    pub fn set_stock(&mut self, index: usize, new_stock: &str) -> Result<()> {
        self.catalog.get(index)?;
        let stock = parse_stock(new_stock)?;

        let old = self.catalog.set_stock(index, stock)?;
        if let Err(e) = self.persist() {
            self.catalog.set_stock(index, old)?;
            return Err(e);
        }

        log::info!("Stock at position {index} changed from {old} to {stock}");
        Ok(())
    }

    /// Remove the product at `index` and persist. Positions after `index`
    /// shift down by one, so indices captured earlier are stale afterwards.
    pub fn remove(&mut self, index: usize) -> Result<Product> {
        let removed = self.catalog.remove(index)?;
        if let Err(e) = self.persist() {
            self.catalog.insert(index, removed);
            return Err(e);
        }

        log::info!("Removed product '{}' from position {}", removed.name, index);
        Ok(removed)
    }

    pub fn view(&self, index: usize) -> Result<&Product> {
        self.catalog.get(index)
    }

    /// Current catalog as snapshot text
    pub fn serialize(&self) -> Result<String> {
        self.catalog.to_snapshot().map_err(CatalogError::Serialize)
    }

    /// Overwrite the stored snapshot with the current catalog
    pub fn persist(&mut self) -> Result<()> {
        let snapshot = self.serialize()?;
        self.storage.set(&self.key, &snapshot)?;
        log::debug!(
            "Persisted {} products under '{}'",
            self.catalog.len(),
            self.key
        );
        Ok(())
    }

    /// Forget the stored snapshot and empty the catalog; the next load reseeds
    pub fn reset(&mut self) -> Result<()> {
        self.storage.remove(&self.key)?;
        self.catalog = Catalog::new();
        log::info!("Dropped stored snapshot '{}'", self.key);
        Ok(())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

//! Error types for product_catalog

use std::path::PathBuf;
use thiserror::Error;

/// Failure while producing the initial catalog from the snapshot or the seed
#[derive(Debug, Error)]
pub enum LoadError {
    /// HTTP request failed (connection refused, TLS, body read, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Seed server answered with a non-success status
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Seed file could not be read
    #[error("Failed to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Seed body or stored snapshot is not a valid product list
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Stored snapshot could not be read from storage
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// User input rejected before touching the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product name must not be empty")]
    EmptyName,
    #[error("Invalid price '{0}': expected a non-negative number")]
    InvalidPrice(String),
    #[error("Invalid stock '{0}': expected a non-negative whole number")]
    InvalidStock(String),
    #[error("Attribute name '{0}' is reserved")]
    ReservedAttribute(String),
    #[error("Attribute '{0}' must be a string, number or boolean")]
    InvalidAttribute(String),
    #[error("Search query must not be empty")]
    EmptyQuery,
    #[error("Invalid option '{0}': choose add, search or show")]
    InvalidOption(String),
}

/// Key-value storage failure
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Unified error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Positional reference outside the current catalog
    #[error("No product at position {index} (catalog has {len} products)")]
    Index { index: usize, len: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

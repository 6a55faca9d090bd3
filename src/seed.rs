//! Seed product list fetching and parsing

use crate::error::LoadError;
use crate::models::Product;
use std::fmt;
use std::path::{Path, PathBuf};

/// Seed file used when nothing else is configured
pub const DEFAULT_SEED: &str = "./productos.json";

/// Where the initial product list comes from when no snapshot exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    Url(String),
    File(PathBuf),
}

impl SeedSource {
    /// `http://` and `https://` locations are fetched, anything else is a file path
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            SeedSource::Url(location.to_string())
        } else {
            SeedSource::File(PathBuf::from(location))
        }
    }

    /// Fetch and parse the seed list
    pub async fn fetch(&self) -> Result<Vec<Product>, LoadError> {
        let products = match self {
            SeedSource::Url(url) => Self::fetch_url(url).await?,
            SeedSource::File(path) => Self::read_file(path)?,
        };
        log::info!("Loaded {} seed products from {}", products.len(), self);
        Ok(products)
    }

    async fn fetch_url(url: &str) -> Result<Vec<Product>, LoadError> {
        log::info!("Fetching seed products from: {}", url);

        let response = reqwest::Client::new()
            .get(url)
            .header("User-Agent", "product_catalog/1.0")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LoadError::HttpStatus(response.status()));
        }

        // Read the body first so a malformed document is a parse error,
        // not a network error
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn read_file(path: &Path) -> Result<Vec<Product>, LoadError> {
        log::info!("Reading seed products from: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl Default for SeedSource {
    fn default() -> Self {
        SeedSource::File(PathBuf::from(DEFAULT_SEED))
    }
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedSource::Url(url) => write!(f, "{}", url),
            SeedSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

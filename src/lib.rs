//! Product Catalog - local product list manager
//!
//! Loads a product list from a stored snapshot, or from a JSON seed when no
//! snapshot exists, and keeps the snapshot in sync with every add, stock
//! change and delete.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fields;
pub mod formatters;
pub mod models;
pub mod presenter;
pub mod seed;
pub mod session;
pub mod storage;
pub mod store;

pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, LoadError, Result, StorageError, ValidationError};
pub use models::{Product, ProductFields};
pub use presenter::{Presenter, TerminalPresenter};
pub use seed::SeedSource;
pub use session::{Action, ActionForm, Request, Session};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{CatalogStore, LoadSource};

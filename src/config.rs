//! Runtime configuration resolved from the command line and environment

use std::path::PathBuf;

use crate::cli::Cli;
use crate::seed::SeedSource;
use crate::storage::FileStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: SeedSource,
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub assume_yes: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            seed: SeedSource::parse(&cli.seed),
            data_dir: cli.data_dir.clone().unwrap_or_else(FileStore::default_dir),
            storage_key: cli.key.clone(),
            assume_yes: cli.yes,
        }
    }

    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.data_dir)
    }
}

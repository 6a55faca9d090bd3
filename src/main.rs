//! Product Catalog - local product list manager
//!
//! Each invocation loads the catalog (stored snapshot first, seed otherwise),
//! runs one command and writes the snapshot back after any change.

use clap::Parser;
use product_catalog::cli::Cli;
use product_catalog::{CatalogStore, Config, Session, TerminalPresenter};

#[tokio::main]
async fn main() {
    // Initialize logging. Set RUST_LOG to control the level, e.g. RUST_LOG=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    log::info!("Storage directory: {}", config.data_dir.display());

    let store = CatalogStore::new(config.file_store(), config.storage_key.clone());
    let presenter = TerminalPresenter::new(std::io::stdin().lock(), std::io::stdout())
        .assume_yes(config.assume_yes);
    let mut session = Session::new(store, presenter);

    // Failures were already reported by the session
    if session.run(cli.command.into_request(), &config.seed).await.is_err() {
        std::process::exit(1);
    }
}

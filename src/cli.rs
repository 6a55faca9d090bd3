//! Command line interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::ProductFields;
use crate::seed::DEFAULT_SEED;
use crate::session::{Action, ActionForm, Request};
use crate::store::DEFAULT_STORAGE_KEY;

/// Product catalog manager - keeps a local product list in sync with its stored snapshot
#[derive(Parser, Debug)]
#[command(name = "product_catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Seed product list (URL or file), only read when no stored catalog exists
    #[arg(long, env = "CATALOG_SEED", default_value = DEFAULT_SEED)]
    pub seed: String,

    /// Directory holding the stored catalog (default: ~/.local/share/product_catalog)
    #[arg(long, env = "CATALOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Storage key the catalog snapshot is kept under
    #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
    pub key: String,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true, default_value_t = false)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List all products with their positions
    List,
    /// Add a product
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        price: String,
        #[arg(long, allow_hyphen_values = true)]
        stock: String,
        /// Extra attribute as name=value (repeatable)
        #[arg(long = "attr", value_parser = parse_attribute)]
        attributes: Vec<(String, String)>,
    },
    /// Show details of the first product whose name contains QUERY
    Search { query: String },
    /// Show details of the product at INDEX
    Show { index: usize },
    /// Change the stock of the product at INDEX (prompts when VALUE is omitted)
    SetStock {
        index: usize,
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
    /// Delete the product at INDEX after confirmation
    Remove { index: usize },
    /// Run a main-menu option by name (add, search or show)
    Menu {
        option: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        price: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        stock: String,
        /// Extra attribute as name=value (repeatable)
        #[arg(long = "attr", value_parser = parse_attribute)]
        attributes: Vec<(String, String)>,
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Drop the stored catalog so the seed is loaded again next time
    Reset,
}

impl Command {
    pub fn into_request(self) -> Request {
        let action = match self {
            Command::List => Action::Show,
            Command::Add {
                name,
                price,
                stock,
                attributes,
            } => Action::Add {
                fields: ProductFields::new(name, price, stock),
                attributes,
            },
            Command::Search { query } => Action::Search { query },
            Command::Show { index } => Action::View { index },
            Command::SetStock { index, value } => match value {
                Some(stock) => Action::SetStock { index, stock },
                None => Action::ChangeStock { index },
            },
            Command::Remove { index } => Action::Delete { index },
            Command::Menu {
                option,
                name,
                price,
                stock,
                attributes,
                query,
            } => {
                let form = ActionForm {
                    fields: ProductFields::new(name, price, stock),
                    attributes,
                    query,
                };
                return Request::Option { option, form };
            }
            Command::Reset => return Request::Reset,
        };
        Request::Run(action)
    }
}

/// Parse a `name=value` attribute argument
fn parse_attribute(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid attribute '{s}': expected name=value"))?;
    Ok((name.to_string(), value.to_string()))
}

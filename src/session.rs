//! Command handlers tying the catalog store to a presenter.
//!
//! Each handler runs one user action to completion. Failures are reported
//! through [`Presenter::notify_error`] and also returned, so the caller can
//! react (e.g. set an exit code) without the session ever aborting.

use crate::error::{CatalogError, LoadError, Result, ValidationError};
use crate::models::{Product, ProductFields};
use crate::presenter::Presenter;
use crate::seed::SeedSource;
use crate::store::{CatalogStore, LoadSource};
use crate::storage::KeyValueStore;

/// A user action, as dispatched by [`Session::execute`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add {
        fields: ProductFields,
        attributes: Vec<(String, String)>,
    },
    Search {
        query: String,
    },
    Show,
    View {
        index: usize,
    },
    /// Interactive stock change: the presenter is asked for the new value
    ChangeStock {
        index: usize,
    },
    /// Stock change with the value already known
    SetStock {
        index: usize,
        stock: String,
    },
    Delete {
        index: usize,
    },
}

impl Action {
    /// Build the action behind a main-menu option name.
    ///
    /// Only the menu entries are accepted (`add`, `search`, `show`, or their
    /// Spanish labels); anything else is a [`ValidationError::InvalidOption`].
    pub fn from_option(option: &str, form: ActionForm) -> std::result::Result<Self, ValidationError> {
        match option.trim().to_lowercase().as_str() {
            "add" | "agregar" => Ok(Action::Add {
                fields: form.fields,
                attributes: form.attributes,
            }),
            "search" | "buscar" => Ok(Action::Search { query: form.query }),
            "show" | "mostrar" => Ok(Action::Show),
            _ => Err(ValidationError::InvalidOption(option.trim().to_string())),
        }
    }
}

/// Everything a menu option may read: the add form and the search box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionForm {
    pub fields: ProductFields,
    pub attributes: Vec<(String, String)>,
    pub query: String,
}

/// One invocation's worth of work, as handed to [`Session::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Run(Action),
    /// A menu option picked by name, resolved with [`Action::from_option`]
    Option { option: String, form: ActionForm },
    /// Forget the stored catalog; needs no loaded catalog
    Reset,
}

pub struct Session<S, P> {
    store: CatalogStore<S>,
    presenter: P,
}

impl<S: KeyValueStore, P: Presenter> Session<S, P> {
    pub fn new(store: CatalogStore<S>, presenter: P) -> Self {
        Self { store, presenter }
    }

    /// Load the catalog. A freshly seeded catalog is rendered, which also
    /// writes the first snapshot. A load failure is reported and leaves an
    /// empty, unrendered catalog; the session stays usable.
    pub async fn start(&mut self, seed: &SeedSource) -> std::result::Result<LoadSource, LoadError> {
        match self.store.load(seed).await {
            Ok(LoadSource::Seed) => {
                // A failed write is already reported; the seeded catalog stays loaded
                if let Err(e) = self.render() {
                    log::warn!("Seeded catalog was not stored: {}", e);
                }
                Ok(LoadSource::Seed)
            }
            Ok(source) => Ok(source),
            Err(e) => {
                log::error!("Failed to load catalog: {}", e);
                self.presenter
                    .notify_error(&format!("Could not load the product catalog: {e}"));
                Err(e)
            }
        }
    }

    pub fn execute(&mut self, action: Action) -> Result<()> {
        log::debug!("Executing {:?}", action);
        match action {
            Action::Add { fields, attributes } => self.add(&fields, &attributes).map(drop),
            Action::Search { query } => self.search(&query).map(drop),
            Action::Show => self.render(),
            Action::View { index } => self.view(index),
            Action::ChangeStock { index } => self.change_stock(index).map(drop),
            Action::SetStock { index, stock } => self.set_stock(index, &stock),
            Action::Delete { index } => self.delete(index).map(drop),
        }
    }

    /// Run a menu option given by name. Unknown names are reported as an
    /// invalid option and nothing else happens.
    pub fn execute_option(&mut self, option: &str, form: ActionForm) -> Result<()> {
        let result = Action::from_option(option, form).map_err(CatalogError::from);
        let action = self.report(result)?;
        self.execute(action)
    }

    /// Carry out one request end to end: load when a catalog is needed, then
    /// run it. Every failure has been reported by the time this returns, so
    /// an `Err` only tells the caller the request did not succeed.
    pub async fn run(&mut self, request: Request, seed: &SeedSource) -> Result<()> {
        let action = match request {
            Request::Reset => return self.reset(),
            Request::Run(action) => action,
            Request::Option { option, form } => {
                let result = Action::from_option(&option, form).map_err(CatalogError::from);
                self.report(result)?
            }
        };

        let source = self.start(seed).await?;
        if source == LoadSource::Seed && action == Action::Show {
            // start already drew the freshly seeded list
            return Ok(());
        }
        self.execute(action)
    }

    fn report<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            log::warn!("Action failed: {}", e);
            self.presenter.notify_error(&e.to_string());
        }
        result
    }

    pub fn add(&mut self, fields: &ProductFields, attributes: &[(String, String)]) -> Result<Product> {
        let result = self.store.add(fields, attributes);
        let product = self.report(result)?;

        self.presenter.notify_success("Product added");
        self.render()?;
        Ok(product)
    }

    /// Show the first product whose name contains `query`.
    /// Returns its position, or `None` when nothing matched.
    pub fn search(&mut self, query: &str) -> Result<Option<usize>> {
        let query = query.trim();
        if query.is_empty() {
            return self.report(Err(ValidationError::EmptyQuery.into()));
        }

        match self.store.search(query) {
            Some((index, product)) => {
                self.presenter.show_details(index, product);
                Ok(Some(index))
            }
            None => {
                self.presenter
                    .notify_error(&format!("No product matching '{query}' in the catalog"));
                Ok(None)
            }
        }
    }

    pub fn view(&mut self, index: usize) -> Result<()> {
        let result = self.store.view(index).cloned();
        let product = self.report(result)?;
        self.presenter.show_details(index, &product);
        Ok(())
    }

    /// Ask the presenter for a new stock value and commit it.
    ///
    /// Nothing is written until the prompt returns a valid value; cancelling
    /// or entering garbage leaves the catalog and the snapshot untouched.
    /// Returns whether the stock was changed.
    pub fn change_stock(&mut self, index: usize) -> Result<bool> {
        let result = self.store.view(index).cloned();
        let product = self.report(result)?;

        let Some(answer) = self.presenter.prompt_stock(&product) else {
            log::debug!("Stock change for '{}' cancelled", product.name);
            return Ok(false);
        };

        self.set_stock(index, &answer)?;
        Ok(true)
    }

    pub fn set_stock(&mut self, index: usize, stock: &str) -> Result<()> {
        let result = self.store.set_stock(index, stock);
        self.report(result)?;

        self.presenter.notify_success("Stock updated");
        self.render()
    }

    /// Remove a product after the user confirms.
    /// Returns the removed product, or `None` if the user declined.
    pub fn delete(&mut self, index: usize) -> Result<Option<Product>> {
        let result = self.store.view(index).map(|product| product.name.clone());
        let name = self.report(result)?;

        let question = format!("Are you sure you want to delete {name}? This cannot be undone.");
        if !self.presenter.confirm(&question) {
            log::debug!("Deletion of '{}' declined", name);
            return Ok(None);
        }

        let result = self.store.remove(index);
        let removed = self.report(result)?;

        self.render()?;
        self.presenter.notify_success(&format!("{} has been deleted", removed.name));
        Ok(Some(removed))
    }

    /// Redraw the list and persist the catalog
    pub fn render(&mut self) -> Result<()> {
        self.presenter.render_list(self.store.catalog().as_slice());
        let result = self.store.persist();
        self.report(result)
    }

    /// Drop the stored snapshot so the next start loads the seed again
    pub fn reset(&mut self) -> Result<()> {
        let result = self.store.reset();
        self.report(result)?;
        self.presenter
            .notify_success("Stored catalog removed; the seed will be loaded on next start");
        Ok(())
    }

    pub fn store(&self) -> &CatalogStore<S> {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }
}

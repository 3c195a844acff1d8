//! # API Facade
//!
//! Thin entry point over the command layer. UI clients construct a
//! [`FiltersApi`] around a [`ConfigStore`] and call operations that return
//! structured [`CmdResult`] values; no business logic lives here.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::form::FormHost;
use crate::store::ConfigStore;

/// The main facade for filter operations, generic over the storage backend.
pub struct FiltersApi<S: ConfigStore> {
    store: S,
}

impl<S: ConfigStore> FiltersApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_filters(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    /// Opens the filter editor. `name = None` creates a new filter; `copy`
    /// clones the named filter into a fresh record before editing.
    pub fn edit_filter<H: FormHost>(
        &mut self,
        host: &mut H,
        name: Option<&str>,
        copy: bool,
    ) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, host, name, copy)
    }

    pub fn delete_filter(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, name)
    }
}

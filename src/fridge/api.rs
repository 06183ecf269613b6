//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for local
//! operations, whether they come from the `fridge` binary or from HTTP handlers.
//!
//! The API does not print, does not know about HTTP, and holds no business logic;
//! it dispatches to `commands::*` and hands back [`CmdResult`]s.
//!
//! `FridgeApi<S: ItemStore>` is generic over the storage backend:
//! - Production: `FridgeApi<SqliteStore>`
//! - Testing: `FridgeApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::NewItem;
use crate::store::ItemStore;

pub struct FridgeApi<S: ItemStore> {
    store: S,
}

impl<S: ItemStore> FridgeApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_item(&mut self, new_item: &NewItem) -> Result<CmdResult> {
        commands::add::run(&mut self.store, new_item)
    }

    pub fn list_items(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_item(&self, id: i64) -> Result<CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn remove_item(&mut self, id: i64) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, id)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

//! # Storage Layer
//!
//! The [`ItemStore`] trait is the only way the rest of the crate reaches persistence.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production storage, one `fridge` table in a SQLite file
//!   - Schema and the `last_changed` trigger are created on open if absent
//!   - `open_in_memory` gives tests an isolated database
//!
//! - [`memory::InMemoryStore`]: Vec-backed storage for testing
//!   - No persistence
//!   - Same id and timestamp rules as SQLite
//!
//! ## Contract
//!
//! - Ids are assigned by the store, strictly increasing, never reused after removal.
//! - `list_all` returns items in storage order; callers must not rely on a sort.
//! - `get_by_id` on a missing id is [`FridgeError::NotFound`](crate::error::FridgeError::NotFound).
//! - `remove` on a missing id succeeds and returns `false`.
//! - Stores do not validate names or quantities; that happens at the boundary.

use crate::error::Result;
use crate::model::Item;
use chrono::NaiveDate;

pub mod memory;
pub mod sqlite;

pub trait ItemStore {
    /// Insert a new item and return the id the store assigned to it.
    fn add(&mut self, name: &str, quantity: f64, expiration_date: NaiveDate) -> Result<i64>;

    /// Every item, in storage order.
    fn list_all(&self) -> Result<Vec<Item>>;

    fn get_by_id(&self, id: i64) -> Result<Item>;

    /// Delete an item and report whether it was there. Missing ids are not an error.
    fn remove(&mut self, id: i64) -> Result<bool>;
}

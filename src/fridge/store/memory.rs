use super::ItemStore;
use crate::error::{FridgeError, Result};
use crate::model::Item;
use chrono::{NaiveDate, Timelike, Utc};

/// Vec-backed store with the same id rules as SQLite's AUTOINCREMENT.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
    last_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemStore for InMemoryStore {
    fn add(&mut self, name: &str, quantity: f64, expiration_date: NaiveDate) -> Result<i64> {
        self.last_id += 1;
        let now = Utc::now().naive_utc();
        self.items.push(Item {
            id: self.last_id,
            name: name.to_string(),
            quantity,
            expiration_date,
            // CURRENT_TIMESTAMP has second precision
            last_changed: now.with_nanosecond(0).unwrap_or(now),
        });
        Ok(self.last_id)
    }

    fn list_all(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn get_by_id(&self, id: i64) -> Result<Item> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(FridgeError::NotFound(id))
    }

    fn remove(&mut self, id: i64) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        Ok(self.items.len() < before)
    }
}

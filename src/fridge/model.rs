use crate::error::{FridgeError, Result};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual format of every date crossing a boundary (CLI flags, forms, JSON, display).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days added to today when an item is added without an expiration date.
pub const DEFAULT_SHELF_LIFE_DAYS: i64 = 7;

pub const DEFAULT_QUANTITY: f64 = 1.0;

const RULE: &str = "-------------------------------------";

/// A single fridge entry as persisted by a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub quantity: f64,
    pub expiration_date: NaiveDate,
    #[serde(with = "date_only")]
    pub last_changed: NaiveDateTime,
}

impl Item {
    /// The display block with `indent` prepended to every line.
    pub fn indented(&self, indent: &str) -> String {
        self.to_string()
            .lines()
            .map(|line| format!("{indent}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "ID:                  {:03}", self.id)?;
        writeln!(f, "Name:                {}", self.name)?;
        writeln!(f, "Quantity:            {:.2}", self.quantity)?;
        writeln!(
            f,
            "Expiration Date:     {}",
            self.expiration_date.format(DATE_FORMAT)
        )?;
        writeln!(
            f,
            "Last Changed:        {}",
            self.last_changed.format(DATE_FORMAT)
        )?;
        write!(f, "{RULE}")
    }
}

/// An item as requested by a user, before the store has assigned an id.
///
/// Also the body of `POST /items`. Clients that send a full [`Item`] are accepted:
/// `id` and `last_changed` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    pub expiration_date: NaiveDate,
}

fn default_quantity() -> f64 {
    DEFAULT_QUANTITY
}

impl NewItem {
    pub fn new(name: impl Into<String>, quantity: f64, expiration_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            quantity,
            expiration_date,
        }
    }

    /// Rejects input that must never reach a store.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FridgeError::validation("provide a name for the item"));
        }
        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Err(FridgeError::validation(format!(
                "Invalid quantity: {}",
                self.quantity
            )));
        }
        Ok(())
    }
}

/// Transient snapshot of the fridge contents. The store stays the source of truth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    pub items: Vec<Item>,
}

impl Collection {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn get(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl IntoIterator for Collection {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        FridgeError::validation(format!(
            "Invalid expiration date '{}', expected YYYY-MM-DD",
            input
        ))
    })
}

pub fn parse_quantity(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| FridgeError::validation(format!("Invalid quantity '{}'", input)))
}

/// Expiration used when none is given: a week from today.
pub fn default_expiration() -> NaiveDate {
    Local::now().date_naive() + Duration::days(DEFAULT_SHELF_LIFE_DAYS)
}

/// Serializes a timestamp as its calendar date; reads back either form.
mod date_only {
    use super::DATE_FORMAT;
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let raw = raw.trim_end_matches('Z');
        for format in DATETIME_FORMATS {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(parsed);
            }
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(|date| date.and_hms_opt(0, 0, 0).unwrap_or_default())
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> Item {
        Item {
            id: 1,
            name: "milk".into(),
            quantity: 1.0,
            expiration_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            last_changed: NaiveDate::from_ymd_opt(2024, 5, 20)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn display_block_layout() {
        let expected = "\
-------------------------------------
ID:                  001
Name:                milk
Quantity:            1.00
Expiration Date:     2024-06-01
Last Changed:        2024-05-20
-------------------------------------";
        assert_eq!(milk().to_string(), expected);
    }

    #[test]
    fn indented_prefixes_every_line() {
        let block = milk().indented("  ");
        assert_eq!(block.lines().count(), 7);
        assert!(block.lines().all(|l| l.starts_with("  ")));
    }

    #[test]
    fn json_uses_date_only_fields() {
        let json = serde_json::to_value(milk()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "milk",
                "quantity": 1.0,
                "expiration_date": "2024-06-01",
                "last_changed": "2024-05-20",
            })
        );
    }

    #[test]
    fn last_changed_accepts_full_timestamps() {
        let json = r#"{"id":3,"name":"eggs","quantity":12,"expiration_date":"2024-06-01","last_changed":"2024-05-20 09:30:00"}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.last_changed, milk().last_changed);
    }

    #[test]
    fn collection_serializes_as_array() {
        let empty = serde_json::to_string(&Collection::default()).unwrap();
        assert_eq!(empty, "[]");

        let one = Collection::new(vec![milk()]);
        let parsed: Collection =
            serde_json::from_str(&serde_json::to_string(&one).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get(1).map(|i| i.name.as_str()), Some("milk"));
    }

    #[test]
    fn new_item_ignores_store_fields() {
        let json = r#"{"id":9,"name":"milk","quantity":2.5,"expiration_date":"2024-06-01","last_changed":"2024-01-01"}"#;
        let new_item: NewItem = serde_json::from_str(json).unwrap();
        assert_eq!(new_item.name, "milk");
        assert_eq!(new_item.quantity, 2.5);
    }

    #[test]
    fn new_item_quantity_defaults_to_one() {
        let new_item: NewItem =
            serde_json::from_str(r#"{"name":"jam","expiration_date":"2025-01-01"}"#).unwrap();
        assert_eq!(new_item.quantity, DEFAULT_QUANTITY);
    }

    #[test]
    fn validate_rejects_blank_name() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let err = NewItem::new("   ", 1.0, date).validate().unwrap_err();
        assert!(matches!(err, FridgeError::Validation(_)));
    }

    #[test]
    fn validate_rejects_negative_and_nan_quantity() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(NewItem::new("milk", -1.0, date).validate().is_err());
        assert!(NewItem::new("milk", f64::NAN, date).validate().is_err());
        assert!(NewItem::new("milk", 0.0, date).validate().is_ok());
    }

    #[test]
    fn parse_date_requires_iso_format() {
        assert_eq!(
            parse_date("2024-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(parse_date("06/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn parse_quantity_rejects_text() {
        assert_eq!(parse_quantity(" 2.5 ").unwrap(), 2.5);
        assert!(matches!(
            parse_quantity("lots"),
            Err(FridgeError::Validation(_))
        ));
    }

    #[test]
    fn default_expiration_is_a_week_out() {
        let today = Local::now().date_naive();
        assert_eq!(default_expiration() - today, Duration::days(7));
    }
}

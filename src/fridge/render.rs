//! # Rendering
//!
//! Terminal output and the web page are both minijinja templates, kept as stand-alone
//! files under `templates/` and included here as string constants.
//!
//! Layout math (padding, number formatting, expiry checks) stays in Rust; templates
//! only decide structure and pick styles. Terminal templates style text through the
//! `style` filter:
//!
//! ```jinja
//! {{ row.label | style("label") }}{{ row.value | style(row.style) }}
//! ```
//!
//! Styles are named `console::Style`s collected in a [`Theme`]. When the renderer
//! is built without color (piped output, `TERM=dumb`, tests) the filter is a no-op,
//! so plain terminal output is byte-for-byte the `Display` form of an item.
//!
//! The HTML template is registered under a `.html` name, which turns on minijinja's
//! auto-escaping for it.

use crate::commands::{CmdMessage, MessageLevel};
use crate::error::Result;
use crate::model::{default_expiration, Collection, Item, DATE_FORMAT};
use chrono::{Local, NaiveDate};
use console::{Style, Term};
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

pub const ITEM_TEMPLATE: &str = include_str!("templates/item.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const PAGE_TEMPLATE: &str = include_str!("templates/index.html");

const RULE: &str = "-------------------------------------";
const LABEL_WIDTH: usize = 21;

/// Named styles applied by the `style` filter. Unknown names render unstyled.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).force_styling(true).to_string(),
            None => text.to_string(),
        }
    }
}

pub static FRIDGE_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("rule", Style::new().dim())
        .add("label", Style::new().bold())
        .add("id", Style::new().yellow())
        .add("name", Style::new().cyan())
        .add("quantity", Style::new())
        .add("date", Style::new())
        .add("expired", Style::new().red())
        .add("last_changed", Style::new().dim())
        .add("success", Style::new().green())
        .add("warning", Style::new().yellow())
});

#[derive(Serialize)]
struct ItemRow {
    label: String,
    value: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ItemData {
    rule: &'static str,
    rows: Vec<ItemRow>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct PageItem {
    id: i64,
    name: String,
    quantity: String,
    expiration_date: String,
    expired: bool,
}

#[derive(Serialize)]
struct PageData {
    items: Vec<PageItem>,
    default_expiration: String,
}

fn row(label: &str, value: String, style: &'static str) -> ItemRow {
    ItemRow {
        label: format!("{:<width$}", label, width = LABEL_WIDTH),
        value,
        style,
    }
}

fn is_expired(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

fn level_style(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Success => "success",
        MessageLevel::Warning => "warning",
    }
}

/// Renderer with every fridge template pre-registered.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Color follows the capabilities of stdout.
    pub fn new() -> Result<Self> {
        Self::with_color(Term::stdout().features().colors_supported())
    }

    pub fn plain() -> Result<Self> {
        Self::with_color(false)
    }

    pub fn with_color(use_color: bool) -> Result<Self> {
        let mut env = Environment::new();
        register_style_filter(&mut env, FRIDGE_THEME.clone(), use_color);
        env.add_template("item", ITEM_TEMPLATE)?;
        env.add_template("messages", MESSAGES_TEMPLATE)?;
        env.add_template("index.html", PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn item(&self, item: &Item) -> Result<String> {
        let today = Local::now().date_naive();
        let expiry_style = if is_expired(item.expiration_date, today) {
            "expired"
        } else {
            "date"
        };
        let data = ItemData {
            rule: RULE,
            rows: vec![
                row("ID:", format!("{:03}", item.id), "id"),
                row("Name:", item.name.clone(), "name"),
                row("Quantity:", format!("{:.2}", item.quantity), "quantity"),
                row(
                    "Expiration Date:",
                    item.expiration_date.format(DATE_FORMAT).to_string(),
                    expiry_style,
                ),
                row(
                    "Last Changed:",
                    item.last_changed.format(DATE_FORMAT).to_string(),
                    "last_changed",
                ),
            ],
        };
        Ok(self.env.get_template("item")?.render(&data)?)
    }

    /// One block per item, newline separated. Empty string for an empty collection.
    pub fn items(&self, items: &Collection) -> Result<String> {
        let blocks = items
            .iter()
            .map(|item| self.item(item))
            .collect::<Result<Vec<_>>>()?;
        Ok(blocks.join("\n"))
    }

    /// Every message on its own line, trailing newline included.
    pub fn messages(&self, messages: &[CmdMessage]) -> Result<String> {
        let data = MessagesData {
            messages: messages
                .iter()
                .map(|m| MessageData {
                    content: m.content.clone(),
                    style: level_style(m.level),
                })
                .collect(),
        };
        Ok(self.env.get_template("messages")?.render(&data)?)
    }

    /// The full HTML page: item table with remove buttons plus the add form.
    pub fn page(&self, items: &Collection) -> Result<String> {
        let today = Local::now().date_naive();
        let data = PageData {
            items: items
                .iter()
                .map(|item| PageItem {
                    id: item.id,
                    name: item.name.clone(),
                    quantity: format_quantity(item.quantity),
                    expiration_date: item.expiration_date.format(DATE_FORMAT).to_string(),
                    expired: is_expired(item.expiration_date, today),
                })
                .collect(),
            default_expiration: default_expiration().format(DATE_FORMAT).to_string(),
        };
        Ok(self.env.get_template("index.html")?.render(&data)?)
    }
}

/// `1` for whole quantities, `0.5` otherwise.
fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{:.0}", quantity)
    } else {
        quantity.to_string()
    }
}

fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            theme.apply(&name, &text)
        } else {
            text
        }
    });
}

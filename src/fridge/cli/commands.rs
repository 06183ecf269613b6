//! # CLI Layer
//!
//! One client of the fridge library: the local `fridge` binary. This is the only
//! place that parses shell arguments, writes to stdout, and turns a [`CmdResult`]
//! into terminal text. Everything it does to the fridge goes through [`FridgeApi`].
//!
//! - `run()`: parse, dispatch, print (called by `main.rs`)
//! - `handle_*()`: per-command handlers
//! - `parse_*()`: turn flag text into typed values, failing with `Validation`

use super::setup::{normalize_args, Cli, Commands, USAGE};
use clap::error::ErrorKind;
use clap::Parser;
use fridge::api::{CmdResult, FridgeApi};
use fridge::config::FridgeConfig;
use fridge::error::{FridgeError, Result};
use fridge::model::{default_expiration, parse_date, parse_quantity, NewItem, DEFAULT_QUANTITY};
use fridge::render::Renderer;
use fridge::store::sqlite::SqliteStore;
use fridge::store::ItemStore;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args())) {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => {
            print!("{USAGE}");
            return Err(usage_error(&err));
        }
    };

    if cli.help {
        print!("{USAGE}");
        return Ok(());
    }

    let command = match cli.command {
        None => {
            print!("{USAGE}");
            return Err(FridgeError::WrongArgCount);
        }
        Some(Commands::Unknown(words)) => {
            let name = words.first().map(String::as_str).unwrap_or_default();
            println!("unknown command: {name}");
            print!("{USAGE}");
            return Err(FridgeError::WrongArgCount);
        }
        Some(command) => command,
    };

    let config = FridgeConfig::load()?;
    debug!(db = %config.db_path.display(), "opening store");
    let mut api = FridgeApi::new(SqliteStore::open(&config.db_path)?);
    let renderer = Renderer::new()?;

    match command {
        Commands::Add {
            name,
            quantity,
            expiration,
        } => handle_add(&mut api, &renderer, name, quantity, expiration),
        Commands::List { id } => handle_list(&api, &renderer, id),
        Commands::Remove { id } => handle_remove(&mut api, &renderer, id),
        Commands::Unknown(_) => Err(FridgeError::WrongArgCount),
    }
}

fn handle_add<S: ItemStore>(
    api: &mut FridgeApi<S>,
    renderer: &Renderer,
    name: Option<String>,
    quantity: Option<String>,
    expiration: Option<String>,
) -> Result<()> {
    let new_item = build_new_item(name, quantity, expiration)?;
    let result = api.add_item(&new_item)?;
    print_result(renderer, &result)
}

fn handle_list<S: ItemStore>(
    api: &FridgeApi<S>,
    renderer: &Renderer,
    id: Option<String>,
) -> Result<()> {
    let (header, result) = match parse_id(id.as_deref())? {
        None | Some(0) => ("Fridge contents:".to_string(), api.list_items()?),
        Some(id) => (format!("Fridge item {id:03}"), api.get_item(id)?),
    };
    println!("{header}");
    if !result.listed_items.is_empty() {
        println!("{}", renderer.items(&result.listed_items)?);
    }
    Ok(())
}

fn handle_remove<S: ItemStore>(
    api: &mut FridgeApi<S>,
    renderer: &Renderer,
    id: Option<String>,
) -> Result<()> {
    let id = match parse_id(id.as_deref())? {
        None | Some(0) => {
            return Err(FridgeError::validation(
                "provide the id of the item to remove",
            ))
        }
        Some(id) => id,
    };
    println!("Removing item {id:03}");
    let result = api.remove_item(id)?;
    print_result(renderer, &result)
}

/// Messages first, then the affected items, so `add` reads `Added item :` above
/// the new item's block and `remove` of a missing id ends with its warning.
fn print_result(renderer: &Renderer, result: &CmdResult) -> Result<()> {
    print!("{}", renderer.messages(&result.messages)?);
    for item in &result.affected_items {
        println!("{}", renderer.item(item)?);
    }
    Ok(())
}

fn build_new_item(
    name: Option<String>,
    quantity: Option<String>,
    expiration: Option<String>,
) -> Result<NewItem> {
    let name = name.unwrap_or_default();
    if name.trim().is_empty() {
        return Err(FridgeError::validation("provide a name for the item"));
    }
    let quantity = match quantity {
        Some(text) => parse_quantity(&text)?,
        None => DEFAULT_QUANTITY,
    };
    let expiration_date = match expiration {
        Some(text) => parse_date(&text)?,
        None => default_expiration(),
    };
    let new_item = NewItem::new(name, quantity, expiration_date);
    new_item.validate()?;
    Ok(new_item)
}

fn parse_id(text: Option<&str>) -> Result<Option<i64>> {
    text.map(|t| {
        t.trim()
            .parse::<i64>()
            .map_err(|_| FridgeError::validation(format!("Invalid id '{t}'")))
    })
    .transpose()
}

fn usage_error(err: &clap::Error) -> FridgeError {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    FridgeError::validation(first.trim_start_matches("error: "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fridge::store::memory::InMemoryStore;

    #[test]
    fn build_requires_name() {
        let err = build_new_item(None, None, None).unwrap_err();
        assert!(matches!(err, FridgeError::Validation(_)));
        let err = build_new_item(Some("   ".into()), None, None).unwrap_err();
        assert_eq!(err.to_string(), "provide a name for the item");
    }

    #[test]
    fn build_applies_defaults() {
        let item = build_new_item(Some("milk".into()), None, None).unwrap();
        assert_eq!(item.quantity, DEFAULT_QUANTITY);
        assert_eq!(item.expiration_date, default_expiration());
    }

    #[test]
    fn build_parses_flags() {
        let item = build_new_item(
            Some("eggs".into()),
            Some("12".into()),
            Some("2024-06-01".into()),
        )
        .unwrap();
        assert_eq!(item.quantity, 12.0);
        assert_eq!(
            item.expiration_date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
    }

    #[test]
    fn build_rejects_bad_values() {
        assert!(build_new_item(Some("eggs".into()), Some("dozen".into()), None).is_err());
        assert!(build_new_item(Some("eggs".into()), Some("-1".into()), None).is_err());
        assert!(build_new_item(Some("eggs".into()), None, Some("06/01/2024".into())).is_err());
    }

    #[test]
    fn id_parsing() {
        assert_eq!(parse_id(None).unwrap(), None);
        assert_eq!(parse_id(Some("7")).unwrap(), Some(7));
        assert!(parse_id(Some("seven")).is_err());
    }

    #[test]
    fn remove_rejects_missing_and_zero_id() {
        let mut api = FridgeApi::new(InMemoryStore::new());
        let renderer = Renderer::plain().unwrap();
        assert!(matches!(
            handle_remove(&mut api, &renderer, None),
            Err(FridgeError::Validation(_))
        ));
        assert!(matches!(
            handle_remove(&mut api, &renderer, Some("0".into())),
            Err(FridgeError::Validation(_))
        ));
    }

    #[test]
    fn list_unknown_id_is_not_found() {
        let api = FridgeApi::new(InMemoryStore::new());
        let renderer = Renderer::plain().unwrap();
        assert!(matches!(
            handle_list(&api, &renderer, Some("5".into())),
            Err(FridgeError::NotFound(5))
        ));
    }
}

//! Remote command-line client for a running `fridge-server`.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fridge::config::FridgeConfig;
use fridge::error::Result;
use fridge::logging;
use fridge::model::{default_expiration, parse_date, NewItem};
use fridge::remote::RemoteClient;
use fridge::render::Renderer;

#[derive(Parser, Debug)]
#[command(
    name = "fridge-cli",
    version,
    about = "A CLI to interact with the fridge database"
)]
struct Cli {
    /// Server base URL (defaults to FRIDGE_URL or http://localhost:8080)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all items in the fridge
    List,

    /// Add an item to the fridge
    Add {
        /// Name of the item
        #[arg(short, long)]
        name: String,

        /// Quantity of the item
        #[arg(short, long)]
        quantity: f64,

        /// Expiration date of the item (YYYY-MM-DD), default today + 7 days
        #[arg(short, long, value_parser = parse_date)]
        expires: Option<NaiveDate>,
    },

    /// Remove an item in the fridge
    Remove {
        /// ID of the item
        #[arg(short, long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() {
    logging::init(logging::CLI_LEVEL);

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let base_url = match cli.url {
        Some(url) => url,
        None => FridgeConfig::load()?.base_url().to_string(),
    };
    let client = RemoteClient::new(base_url)?;

    match cli.command {
        Command::List => {
            let items = client.list_items().await?;
            if !items.is_empty() {
                println!("{}", Renderer::new()?.items(&items)?);
            }
        }
        Command::Add {
            name,
            quantity,
            expires,
        } => {
            let expiration_date = expires.unwrap_or_else(default_expiration);
            let message = client
                .add_item(&NewItem::new(name, quantity, expiration_date))
                .await?;
            println!("{message}!");
        }
        Command::Remove { id } => {
            client.remove_item(id).await?;
            println!("Item removed successfully!");
        }
    }
    Ok(())
}

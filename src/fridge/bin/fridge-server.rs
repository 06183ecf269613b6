//! HTTP front-end: the item page and the JSON API on one listener.

use clap::Parser;
use fridge::config::FridgeConfig;
use fridge::error::Result;
use fridge::{http, logging};
use std::path::PathBuf;
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "fridge-server", version, about = "Serve the fridge over HTTP")]
struct Args {
    /// Address to listen on, e.g. 127.0.0.1:8080
    #[arg(long)]
    addr: Option<String>,

    /// Path of the SQLite database
    #[arg(long)]
    db: Option<PathBuf>,
}

#[actix_web::main]
async fn main() {
    logging::init(logging::SERVER_LEVEL);

    if let Err(e) = run(Args::parse()).await {
        error!(error = %e, "server stopped");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = FridgeConfig::load()?;
    if let Some(addr) = args.addr {
        config.listen_addr = addr;
    }
    if let Some(db) = args.db {
        config.db_path = db;
    }
    http::serve(&config).await
}

//! # Fridge Architecture
//!
//! Fridge keeps track of perishable items: a name, a quantity and an expiration date,
//! stored in a single SQLite table. The library is UI-agnostic; three thin clients sit
//! on top of it:
//!
//! - `fridge`: local command-line tool operating on the database directly
//! - `fridge-server`: HTTP server with an HTML page and a JSON API
//! - `fridge-cli`: remote command-line tool talking to the JSON API
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front-ends (cli/ + main.rs, http/, remote.rs)              │
//! │  - Parse arguments / requests, validate user input          │
//! │  - The ONLY places that know about stdout, exit codes, HTTP │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per verb: add, list, get, remove              │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ItemStore trait                                          │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The remote client is the exception to the layering: it never touches a store and
//! only speaks HTTP to a running `fridge-server`.
//!
//! ## Validation
//!
//! User input is validated at the boundary ([`model::NewItem::validate`]), before
//! anything reaches a store. Stores trust their callers.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all local operations
//! - [`commands`]: Business logic for each verb
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Item`, `NewItem`, `Collection`)
//! - [`render`]: Template rendering for the terminal and the web page
//! - [`http`]: actix-web routes and handlers
//! - [`remote`]: HTTP client for the JSON API
//! - [`config`]: Configuration loading
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the local binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod model;
pub mod remote;
pub mod render;
pub mod store;

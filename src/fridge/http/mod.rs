//! # HTTP Service
//!
//! actix-web front-end over [`FridgeApi`]: an HTML page with a form, and a JSON API.
//!
//! | Route          | Behavior                                               |
//! |----------------|--------------------------------------------------------|
//! | `GET /`        | page listing every item plus the add form              |
//! | `POST /`       | add from form fields, re-render the page               |
//! | `POST /remove` | remove by form field `id`, 303 back to `/`             |
//! | `GET /items`   | all items as a JSON array                              |
//! | `POST /items`  | add from a JSON body                                   |
//!
//! Handlers get their dependencies through [`AppState`] in `web::Data`; there is no
//! process-global state. One mutex inside the state serializes every handler's
//! store section, which is all the coordination SQLite needs here.

use crate::api::FridgeApi;
use crate::config::FridgeConfig;
use crate::error::Result;
use crate::render::Renderer;
use crate::store::sqlite::SqliteStore;
use crate::store::ItemStore;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::info;

pub mod error;
pub mod handlers;


/// Everything a handler needs, injected per app.
pub struct AppState<S: ItemStore> {
    fridge: Mutex<FridgeApi<S>>,
    renderer: Renderer,
}

impl<S: ItemStore> AppState<S> {
    pub fn new(api: FridgeApi<S>) -> Result<Self> {
        Ok(Self {
            fridge: Mutex::new(api),
            renderer: Renderer::plain()?,
        })
    }

    /// Takes the process-wide lock. A handler that panicked while holding it left
    /// the store untouched mid-call at worst, so the guard is recovered.
    pub fn lock(&self) -> MutexGuard<'_, FridgeApi<S>> {
        self.fridge.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

/// Registers every route. Generic so tests can mount an in-memory store.
pub fn configure<S>(cfg: &mut web::ServiceConfig)
where
    S: ItemStore + Send + 'static,
{
    cfg.app_data(handlers::json_config())
        .route("/", web::get().to(handlers::index::<S>))
        .route("/", web::post().to(handlers::add_from_form::<S>))
        .route("/remove", web::post().to(handlers::remove_from_form::<S>))
        .route("/items", web::get().to(handlers::list_items::<S>))
        .route("/items", web::post().to(handlers::add_from_json::<S>));
}

/// Opens the database and serves until the process is stopped.
///
/// Failing to open or initialize the database is fatal: the server never binds.
pub async fn serve(config: &FridgeConfig) -> Result<()> {
    let store = SqliteStore::open(&config.db_path)?;
    let state = web::Data::new(AppState::new(FridgeApi::new(store))?);

    info!(
        addr = %config.listen_addr,
        db = %config.db_path.display(),
        "starting fridge server"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(configure::<SqliteStore>)
    })
    .bind(config.listen_addr.as_str())?
    .run()
    .await?;

    Ok(())
}

use super::error::{ApiError, MessageBody, PageError};
use super::AppState;
use crate::error::FridgeError;
use crate::model::{parse_date, parse_quantity, Collection, NewItem};
use crate::store::ItemStore;
use actix_web::{error::JsonPayloadError, http::header, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::info;

/// Fields of the add form. Missing fields arrive empty and fail validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddForm {
    pub name: String,
    pub quantity: String,
    pub expiration: String,
}

impl AddForm {
    fn into_new_item(self) -> Result<NewItem, FridgeError> {
        let quantity = parse_quantity(&self.quantity)?;
        let expiration_date = parse_date(&self.expiration)?;
        let new_item = NewItem::new(self.name, quantity, expiration_date);
        new_item.validate()?;
        Ok(new_item)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RemoveForm {
    pub id: String,
}

/// JSON bodies need not carry a content type, and decode failures answer in the
/// same `{"message": ...}` shape as every other API error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            let message = format!("Invalid JSON data: {err}");
            ApiError(FridgeError::Validation(message)).into()
        })
}

fn page_response<S: ItemStore>(
    state: &AppState<S>,
    listed: &Collection,
) -> Result<HttpResponse, PageError> {
    let html = state.renderer().page(listed)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

pub async fn index<S: ItemStore>(state: web::Data<AppState<S>>) -> Result<HttpResponse, PageError> {
    let listed = state.lock().list_items()?.listed_items;
    page_response(&state, &listed)
}

pub async fn add_from_form<S: ItemStore>(
    state: web::Data<AppState<S>>,
    form: web::Form<AddForm>,
) -> Result<HttpResponse, PageError> {
    let new_item = form.into_inner().into_new_item()?;
    let mut fridge = state.lock();
    fridge.add_item(&new_item)?;
    let listed = fridge.list_items()?.listed_items;
    drop(fridge);

    page_response(&state, &listed)
}

pub async fn remove_from_form<S: ItemStore>(
    state: web::Data<AppState<S>>,
    form: web::Form<RemoveForm>,
) -> Result<HttpResponse, PageError> {
    let id: i64 = form.id.trim().parse().map_err(|_| {
        FridgeError::validation(format!("Unable to get item to remove: '{}'", form.id))
    })?;

    state.lock().remove_item(id)?;
    info!(id, "removed item via form");

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish())
}

pub async fn list_items<S: ItemStore>(
    state: web::Data<AppState<S>>,
) -> Result<HttpResponse, ApiError> {
    let listed = state.lock().list_items()?.listed_items;
    Ok(HttpResponse::Ok().json(listed))
}

pub async fn add_from_json<S: ItemStore>(
    state: web::Data<AppState<S>>,
    body: web::Json<NewItem>,
) -> Result<HttpResponse, ApiError> {
    let new_item = body.into_inner();
    new_item.validate()?;
    state.lock().add_item(&new_item)?;

    Ok(HttpResponse::Ok().json(MessageBody {
        message: "Item added successfully".to_string(),
    }))
}

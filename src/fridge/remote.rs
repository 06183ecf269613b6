//! # Remote Client
//!
//! Talks to a running `fridge-server` over its JSON API. The verbs mirror the
//! local command layer: list, add, remove.
//!
//! Any status other than the documented success answers becomes
//! [`FridgeError::Remote`] carrying the status and the raw response body.
//! Transport failures surface as [`FridgeError::Http`].

use crate::error::{FridgeError, Result};
use crate::model::{Collection, NewItem};
use reqwest::{redirect::Policy, Client, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: Client,
    base_url: String,
}

impl RemoteClient {
    /// `base_url` is the server root, e.g. `http://localhost:8080`.
    ///
    /// Redirects are never followed: `POST /remove` answers 303 and the page it
    /// points at is of no use to a client.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().redirect(Policy::none()).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_items(&self) -> Result<Collection> {
        let url = self.url("/items");
        debug!(%url, "listing remote items");
        let response = self.client.get(&url).send().await?;
        let response = expect_status(response, &[StatusCode::OK]).await?;
        Ok(response.json::<Collection>().await?)
    }

    /// Returns the server's confirmation message.
    pub async fn add_item(&self, item: &NewItem) -> Result<String> {
        item.validate()?;
        let url = self.url("/items");
        debug!(%url, name = %item.name, "adding remote item");
        let response = self.client.post(&url).json(item).send().await?;
        let response = expect_status(response, &[StatusCode::OK]).await?;
        let body: MessageBody = response.json().await?;
        Ok(body.message)
    }

    pub async fn remove_item(&self, id: i64) -> Result<()> {
        let url = self.url("/remove");
        debug!(%url, id, "removing remote item");
        let response = self
            .client
            .post(&url)
            .form(&[("id", id.to_string())])
            .send()
            .await?;
        expect_status(response, &[StatusCode::SEE_OTHER, StatusCode::OK]).await?;
        Ok(())
    }
}

async fn expect_status(response: Response, accepted: &[StatusCode]) -> Result<Response> {
    let status = response.status();
    if accepted.contains(&status) {
        return Ok(response);
    }
    let body = response.text().await?;
    Err(FridgeError::Remote {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn june() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn list_decodes_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 1,
                "name": "milk",
                "quantity": 1.0,
                "expiration_date": "2024-06-01",
                "last_changed": "2024-05-30"
            }])))
            .mount(&server)
            .await;

        let client = RemoteClient::new(server.uri()).unwrap();
        let items = client.list_items().await.unwrap();
        assert_eq!(items.len(), 1);
        let milk = items.get(1).unwrap();
        assert_eq!(milk.name, "milk");
        assert_eq!(milk.expiration_date, june());
    }

    #[tokio::test]
    async fn add_posts_json_and_returns_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/items"))
            .and(body_json(json!({
                "name": "milk",
                "quantity": 2.0,
                "expiration_date": "2024-06-01"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Item added successfully"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = RemoteClient::new(format!("{}/", server.uri())).unwrap();
        let message = client
            .add_item(&NewItem::new("milk", 2.0, june()))
            .await
            .unwrap();
        assert_eq!(message, "Item added successfully");
    }

    #[tokio::test]
    async fn add_rejects_blank_name_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = RemoteClient::new(server.uri()).unwrap();
        let err = client
            .add_item(&NewItem::new("  ", 1.0, june()))
            .await
            .unwrap_err();
        assert!(matches!(err, FridgeError::Validation(_)));
    }

    #[tokio::test]
    async fn remove_accepts_see_other_without_following() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/remove"))
            .and(body_string("id=3"))
            .respond_with(ResponseTemplate::new(303).insert_header("Location", "/"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = RemoteClient::new(server.uri()).unwrap();
        client.remove_item(3).await.unwrap();
    }

    #[tokio::test]
    async fn unexpected_status_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/remove"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Unable to get item"))
            .mount(&server)
            .await;

        let client = RemoteClient::new(server.uri()).unwrap();
        match client.remove_item(0).await.unwrap_err() {
            FridgeError::Remote { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "Unable to get item");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_on_list_is_remote_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "Internal server error"})),
            )
            .mount(&server)
            .await;

        let client = RemoteClient::new(server.uri()).unwrap();
        let err = client.list_items().await.unwrap_err();
        assert!(matches!(err, FridgeError::Remote { status: 500, .. }));
    }
}

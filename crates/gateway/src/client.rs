//! HTTP client for the catalog backend
//!
//! `ApiClient` wraps a `reqwest::Client` and a base URL. Paths follow the
//! backend's routes:
//!
//! | Operation | Route                         |
//! |-----------|-------------------------------|
//! | list      | `GET {base}/{collection}`     |
//! | create    | `POST {base}/{collection}`    |
//! | update    | `PUT {base}/users/`           |
//! | delete    | `DELETE {base}/{collection}/{id}` |

use async_trait::async_trait;
use bookshelf_core::{CatalogConfig, Collection, RecordId};
use bookshelf_model::RecordPayload;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ApiErrorBody, ClientError};
use crate::gateway::CatalogGateway;

// ============================================================================
// API Client
// ============================================================================

/// HTTP client for the catalog REST API.
///
/// # Example
///
/// ```rust,ignore
/// let client = ApiClient::new(&CatalogConfig::load()?)?;
/// let books = client.fetch_collection(Collection::Books, None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying reqwest HTTP client.
    client: Client,
    /// Base URL of the backend API (e.g. `http://localhost:5001/api`).
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// No timeout is set unless the configuration asks for one.
    pub fn new(config: &CatalogConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;
        info!("Catalog API at {}", config.api_base_url);

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API endpoint path.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    // ========================================================================
    // Generic request helpers
    // ========================================================================

    /// Send a GET request and return the JSON body.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, ClientError> {
        let response = self.client.get(self.url(path)).query(query).send().await?;
        self.handle_response(response).await
    }

    /// Send a POST request with a JSON body.
    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<Value, ClientError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Send a PUT request with a JSON body.
    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<Value, ClientError> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Send a DELETE request.
    async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        let response = self.client.delete(self.url(path)).send().await?;
        self.handle_response(response).await
    }

    /// Handle a response: check for errors and parse the JSON body on success.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value, ClientError> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<Value>()
                .await
                .map_err(|e| ClientError::Parse(e.to_string()))
        } else {
            let body = response.json::<ApiErrorBody>().await.ok();
            Err(ClientError::from_status(status.as_u16(), body))
        }
    }
}

/// Log the backend's confirmation text, if it sent one
fn log_confirmation(body: &Value) {
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        debug!("Backend: {message}");
    }
}

#[async_trait]
impl CatalogGateway for ApiClient {
    async fn fetch_rows(
        &self,
        collection: Collection,
        query: &[(String, String)],
    ) -> Result<Value, ClientError> {
        self.get(collection.path(), query).await
    }

    async fn create_record(&self, payload: &RecordPayload) -> Result<(), ClientError> {
        let body = self.post(payload.collection().path(), payload).await?;
        log_confirmation(&body);
        Ok(())
    }

    async fn update_record(&self, payload: &RecordPayload) -> Result<(), ClientError> {
        // The update route carries the identifier in the body, not the path
        let path = format!("{}/", payload.collection().path());
        let body = self.put(&path, payload).await?;
        log_confirmation(&body);
        Ok(())
    }

    async fn delete_record(&self, collection: Collection, id: RecordId) -> Result<(), ClientError> {
        let body = self.delete(&format!("{}/{}", collection.path(), id)).await?;
        log_confirmation(&body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = ApiClient::new(&CatalogConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5001/api");
        assert_eq!(client.url("books"), "http://localhost:5001/api/books");

        let config = CatalogConfig::default().with_api_base_url("http://127.0.0.1:9000/api/");
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.url("users/"), "http://127.0.0.1:9000/api/users/");
    }

    #[test]
    fn test_timeout_is_optional() {
        let config = CatalogConfig {
            request_timeout_secs: Some(5),
            ..CatalogConfig::default()
        };
        assert!(ApiClient::new(&config).is_ok());
    }
}

//! HTTP client for the remote notes API.
//!
//! Every operation issues exactly one request against `{base_url}/notes`.
//! Failures are logged once where they are detected and then returned to the
//! caller unchanged; there is no retry and no client-side timeout.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use reqwest::{header, Method};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{CreateNoteRequest, Note, NoteId, UpdateNoteRequest};
use crate::util::{compact_body, normalize_base_url};

const NOTES_PATH: &str = "/notes";

/// Per-request headers and body.
///
/// Headers set here replace client defaults of the same name.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying `body` encoded as JSON.
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, ApiError> {
        Self::new().with_json(body)
    }

    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let encoded = serde_json::to_vec(body).map_err(|error| {
            tracing::error!(%error, "API request body could not be encoded");
            ApiError::Encode(error)
        })?;
        self.body = Some(encoded);
        Ok(self)
    }

    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Client for the notes REST endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NotesApiClient {
    base_url: String,
    client: reqwest::Client,
    default_headers: HeaderMap,
}

impl NotesApiClient {
    /// Builds a client for an explicit API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url =
            normalize_base_url(base_url.into().as_str()).map_err(ApiError::InvalidBaseUrl)?;
        let client = reqwest::Client::builder().build()?;
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(Self {
            base_url,
            client,
            default_headers,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(config.base_url.as_str())
    }

    /// Adds (or replaces) a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches every note, in the order the server returns them.
    pub async fn get_all_notes(&self) -> Result<Vec<Note>, ApiError> {
        self.request(Method::GET, NOTES_PATH, RequestOptions::new())
            .await
    }

    /// Server-side search; the query is percent-encoded into `?search=`.
    pub async fn search_notes(&self, query: &str) -> Result<Vec<Note>, ApiError> {
        self.request(Method::GET, &search_endpoint(query), RequestOptions::new())
            .await
    }

    pub async fn create_note(&self, note: &CreateNoteRequest) -> Result<Note, ApiError> {
        self.request(Method::POST, NOTES_PATH, RequestOptions::json(note)?)
            .await
    }

    pub async fn update_note(&self, id: NoteId, note: &UpdateNoteRequest) -> Result<Note, ApiError> {
        self.request(Method::PUT, &note_endpoint(id), RequestOptions::json(note)?)
            .await
    }

    /// Deletes a note. Whatever body the server answers with is discarded.
    pub async fn delete_note(&self, id: NoteId) -> Result<(), ApiError> {
        let url = self.url_for(&note_endpoint(id));
        self.send(Method::DELETE, &url, RequestOptions::new())
            .await
            .map(|_| ())
    }

    /// Issues a request against `{base_url}{endpoint}` and decodes the JSON response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = self.url_for(endpoint);
        let body = self.send(method.clone(), &url, options).await?;
        serde_json::from_str(&body).map_err(|error| {
            tracing::error!(%method, %url, %error, "API response could not be decoded");
            ApiError::Decode(error)
        })
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<String, ApiError> {
        let result = self.execute(method.clone(), url, options).await;
        if let Err(error) = &result {
            tracing::error!(%method, %url, %error, "API request failed");
        }
        result
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<String, ApiError> {
        let mut headers = self.default_headers.clone();
        headers.extend(options.headers);

        let mut request = self.client.request(method, url).headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => compact_body(&body),
                Err(error) => {
                    tracing::debug!(%url, %error, "error response body could not be read");
                    String::new()
                }
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

fn search_endpoint(query: &str) -> String {
    format!("{NOTES_PATH}?search={}", urlencoding::encode(query))
}

fn note_endpoint(id: NoteId) -> String {
    format!("{NOTES_PATH}/{id}")
}

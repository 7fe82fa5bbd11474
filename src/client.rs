use reqwest::{header::CONTENT_TYPE, Client as ReqwestClient, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::Error,
    models::{ApiResponse, Hadith},
    query::SearchQuery,
    result::Result,
};

/// Production endpoint of the hadith service.
const DEFAULT_BASE_URL: &str = "https://deen-api.imaniro.com/api/v1";

/// Header carrying the account's API key on every request.
const API_KEY_HEADER: &str = "X-API-Key";

/// A handle to the hadith service.
///
/// Holds the API key, the base URL and a reusable HTTP connection. Both
/// configuration values are fixed for the life of the client; a client is
/// meant to be created once and reused across sequential calls.
#[derive(Debug, Clone)]
pub struct Client {
    http: ReqwestClient,
    api_key: String,
    base_url: String,
}

impl Client {
    /// Constructs a client against the production service.
    pub fn new(api_key: impl Into<String>) -> Client {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Constructs a client against a custom endpoint.
    ///
    /// Trailing slashes on `base_url` are stripped.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Client {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Client {
            http: ReqwestClient::new(),
            api_key: api_key.into(),
            base_url,
        }
    }

    /// Searches for hadiths matching `query`.
    ///
    /// Issues exactly one `POST {base_url}/hadiths` request and returns the
    /// matching records in the order the service sent them.
    ///
    /// # Errors
    ///
    /// This function will return an error if `max_limit` is outside `1..=500`
    /// (checked before any request is sent), if the request fails at the
    /// transport level, if the service answers with a non-success status
    /// (see [`Error`]), or if a record cannot be decoded. No partial results
    /// are returned on failure.
    pub async fn search(&self, query: SearchQuery) -> Result<Vec<Hadith>> {
        let body = query.into_body()?;
        let url = format!("{}/hadiths", self.base_url);

        log::info!("search request for {url} dispatched");
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let envelope: ApiResponse = interpret(response).await?;
        envelope
            .into_data()
            .into_iter()
            .map(|record| serde_json::from_value(record).map_err(Error::from))
            .collect()
    }

    /// Fetches the service's status report.
    ///
    /// Issues one `GET {base_url}/status` request and returns whatever JSON
    /// the service reports (health, version, ...) verbatim.
    ///
    /// # Errors
    ///
    /// This function will return an error if the request fails at the
    /// transport level, or [`Error::StatusCheck`] on any non-success status.
    /// Status codes are not classified further here, unlike [`search`].
    ///
    /// [`search`]: Client::search
    pub async fn check_status(&self) -> Result<Value> {
        let url = format!("{}/status", self.base_url);

        log::info!("status request for {url} dispatched");
        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        log::info!("status response: {status}");
        match status {
            StatusCode::OK => response.json::<Value>().await.map_err(Into::into),
            status => Err(Error::StatusCheck(status)),
        }
    }
}

/// Turns a raw response into a decoded `T` or the matching error.
///
/// Classification happens on the status code alone; the body is decoded on
/// success and kept as raw text for unmapped failure codes.
async fn interpret<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    log::info!("response status: {status}");

    if status == StatusCode::OK {
        return response.json::<T>().await.map_err(Into::into);
    }

    let body = response.text().await?;
    Err(Error::from_status(status, body))
}

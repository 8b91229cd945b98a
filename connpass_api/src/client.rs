//! HTTP client for the connpass event search API.

use reqwest::{header, Method, Request};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    query::EventQuery,
    types::Results,
    user_agent::{get_user_agent, USER_AGENT},
    Error,
};

/// Endpoint of the public event search API.
pub const BASE_URL: &str = "https://connpass.com/api/v1/event/";

const MEDIA_TYPE: &str = "application/json";

/// HTTP client for the connpass event search API.
///
/// Holds no mutable state after construction, so one instance can be shared
/// across tasks. Timeouts, proxies and TLS settings belong to the
/// `reqwest::Client` passed in at construction.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to [`BASE_URL`].
    base_api_url: String,
    user_agent: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Client {
    /// Creates a new client pointing at the production connpass API.
    ///
    /// When `http` is `None` the client builds and owns a default transport.
    pub fn new(http: Option<reqwest::Client>) -> Self {
        Self::with_base_url(BASE_URL, http)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, http: Option<reqwest::Client>) -> Self {
        Self {
            http: http.unwrap_or_default(),
            base_api_url: base_url.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    /// Library identifier sent in the `User-Agent` header, before the runtime suffix.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn parse_base(&self) -> Result<Url, Error> {
        Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::InvalidUrl(e)
        })
    }

    /// Builds a request for `url`, resolved against the base URL.
    ///
    /// A `Some` body is serialized as JSON. `None` sends an empty payload.
    pub fn new_request<B>(&self, method: Method, url: &str, body: Option<&B>) -> Result<Request, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.parse_base()?.join(url).map_err(|e| {
            tracing::error!("Invalid request URL {}: {}", url, e);
            Error::InvalidUrl(e)
        })?;

        let payload = match body {
            Some(body) => serde_json::to_vec(body).map_err(|e| {
                tracing::error!("Failed to encode request body: {}", e);
                Error::Encode(e)
            })?,
            None => Vec::new(),
        };

        let req = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, MEDIA_TYPE)
            .header(header::ACCEPT, MEDIA_TYPE)
            .header(header::USER_AGENT, get_user_agent(&self.user_agent))
            .body(payload)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build request: {}", e);
                Error::BuildRequest(e)
            })?;
        Ok(req)
    }

    /// Sends `req` and decodes the JSON response body into `T`.
    pub async fn execute<T>(&self, req: Request) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("{} {}", req.method(), req.url());
        let resp = self.http.execute(req).await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        // Raw bytes: JSON is UTF-8 regardless of the charset the server declares.
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_slice::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode(e)
        })
    }

    /// Searches events matching the given query.
    pub async fn search_events(&self, query: &EventQuery) -> Result<Results, Error> {
        let url = query.add_to_url(&self.parse_base()?);
        let req = self.new_request::<()>(Method::GET, url.as_str(), None)?;
        self.execute::<Results>(req).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((end, _)) => format!("{}...[truncated]", &body[..end]),
    }
}

//! HTTP client for the search endpoint.
//!
//! [`SearchClient::find_users`] validates the request locally, performs one
//! GET, and maps every outcome into a [`SearchResponse`] or a [`ClientError`].

use std::fmt;
use std::time::Duration;

use reqwest::Client;

use crate::dto::search::{ACCESS_TOKEN_HEADER, SearchRequest, SearchResponse, SearchWireParams};
use crate::models::config::ClientConfig;

pub mod classify;
pub mod errors;

pub use classify::{MAX_LIMIT, PageWindow, classify_response};
pub use errors::{ArgumentError, ClientError, ClientResult, ErrorKind};

/// Client bound to one search endpoint and access token.
pub struct SearchClient {
    http: Client,
    url: String,
    access_token: String,
    timeout: Option<Duration>,
}

impl SearchClient {
    pub fn new(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
            access_token: access_token.into(),
            timeout: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let client = Self::new(config.url.clone(), config.access_token.clone());
        match config.timeout_ms {
            Some(ms) => client.with_timeout(Duration::from_millis(ms)),
            None => client,
        }
    }

    /// Sets the deadline for each call. Expired calls are not retried.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Searches the remote record set.
    ///
    /// `next_page` is `true` when at least one more match exists past the
    /// returned page.
    pub async fn find_users(&self, request: &SearchRequest) -> ClientResult<SearchResponse> {
        let window = PageWindow::try_from(request)?;

        let params = SearchWireParams {
            limit: window.wire_limit(),
            offset: window.offset,
            order_by: request.order_by.as_i64(),
            order_field: &request.order_field,
            query: &request.query,
        };

        let mut builder = self
            .http
            .get(&self.url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .query(&params);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let http_request = builder.build().map_err(ClientError::Unknown)?;
        let query = http_request.url().query().unwrap_or_default().to_string();

        let response = self
            .http
            .execute(http_request)
            .await
            .map_err(|e| transport_error(e, &query))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(e, &query))?;

        log::debug!("Search {query} answered with {status}");

        classify_response(status, &body, &request.order_field, window)
    }
}

impl fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchClient")
            .field("url", &self.url)
            .field("has_access_token", &!self.access_token.is_empty())
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn transport_error(err: reqwest::Error, query: &str) -> ClientError {
    if err.is_timeout() {
        log::warn!("Search request timed out: {query}");
        ClientError::Timeout {
            query: query.to_string(),
            source: err,
        }
    } else {
        ClientError::Unknown(err)
    }
}

//! Breach search client
//!
//! This module drives the full search flow against the breach-search
//! service: build the request, POST it, parse the response, and verify it
//! client-side. One search is one sequential async flow; nothing here
//! retries, and a failed call surfaces once as a terminal error.

use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde_json::Value;

use breachguard_core::models::{PersonalResponse, SearchMode, SearchRequest, SearchResults};
use breachguard_core::{FieldHasher, FieldType};

use crate::error::{Result, SearchError};
use crate::request::SearchRequestBuilder;
use crate::verify::{process_exact_matches, verify_candidates};

/// Path of the breach-search endpoint
const SEARCH_PATH: &str = "/api/v0/breach-search";

/// Client for the breach-search service
///
/// Raw field values never leave this client: they are normalized and
/// hashed before the request body is built.
pub struct BreachSearchClient {
    /// Base URL for the breach-search API
    base_url: String,

    /// HTTP client
    client: Client,

    /// Timeout for requests
    timeout: Duration,

    /// Hasher pinned to the deployment's digest algorithm
    hasher: FieldHasher,
}

impl BreachSearchClient {
    /// Create a new search client
    pub fn new(base_url: &str) -> Self {
        BreachSearchClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            timeout: Duration::from_secs(30),
            hasher: FieldHasher::default(),
        }
    }

    /// Set the timeout for requests
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the hasher used for digest computation
    pub fn with_hasher(mut self, hasher: FieldHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Run a personal-mode search over multiple fields
    ///
    /// Every non-blank value is hashed in full and matched exactly by the
    /// server. Fails with [`SearchError::NoSearchData`] before any network
    /// call when every value is blank.
    pub async fn search_personal(&self, values: &[(FieldType, String)]) -> Result<SearchResults> {
        let mut builder =
            SearchRequestBuilder::new(SearchMode::Personal).with_hasher(self.hasher);
        for (field_type, value) in values {
            builder = builder.field(*field_type, value.clone());
        }
        let (request, _) = builder.build()?;

        let body = self.post_search(&request).await?;
        let response: PersonalResponse = serde_json::from_str(&body)?;

        Ok(process_exact_matches(&response))
    }

    /// Run a sensitive-mode search over a single field
    ///
    /// Only the k-anonymity prefix of the digest is transmitted; the full
    /// digest is held back and reconciled against the server's candidate
    /// list locally.
    pub async fn search_sensitive(
        &self,
        field_type: FieldType,
        value: &str,
    ) -> Result<SearchResults> {
        let (request, registry) = SearchRequestBuilder::new(SearchMode::Sensitive)
            .with_hasher(self.hasher)
            .field(field_type, value)
            .build()?;

        let body = self.post_search(&request).await?;
        let response: Value = serde_json::from_str(&body)?;

        Ok(verify_candidates(&response, &registry))
    }

    /// POST the search request and return the raw response body
    ///
    /// Non-2xx responses surface the server's `error` message verbatim.
    async fn post_search(&self, request: &SearchRequest) -> Result<String> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        debug!("searching {} field(s) via {}", request.fields.len(), url);

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = match response.text().await {
                Ok(text) => extract_error_message(&text)
                    .unwrap_or_else(|| format!("Server error: {}", status)),
                Err(_) => format!("Server error: {}", status),
            };
            return Err(SearchError::Server(message));
        }

        Ok(response.text().await?)
    }
}

/// Pull the `error` field out of a non-2xx response body
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_string)
}

//! Token List Sources
//!
//! The network seam of the library: a `TokenListSource` fetches one URL and
//! decodes the body into a [`TokenList`]. The HTTP implementation wraps a
//! shared `reqwest` client; the fetch routine and strategies are written
//! against the trait so tests can substitute an in-memory source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::TokenRegistryError;
use crate::types::TokenList;

/// Configuration for the HTTP token list source
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

/// A source of token list documents, one URL at a time
#[async_trait]
pub trait TokenListSource: Send + Sync {
    /// Retrieve `url` and parse the body as a token list document
    async fn fetch_list(&self, url: &str) -> Result<TokenList, TokenRegistryError>;
}

/// HTTP(S) implementation backed by `reqwest`
///
/// Plain GET, no headers, no auth, no retries: recovery from a failed
/// source is the fallback URL swap in the fetch routine, nothing else.
#[derive(Debug, Clone)]
pub struct HttpTokenListSource {
    http: Client,
}

impl HttpTokenListSource {
    /// Create a source with the default configuration
    pub fn new() -> Result<Self, TokenRegistryError> {
        Self::with_config(HttpSourceConfig::default())
    }

    /// Create a source with a custom configuration
    pub fn with_config(config: HttpSourceConfig) -> Result<Self, TokenRegistryError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl TokenListSource for HttpTokenListSource {
    async fn fetch_list(&self, url: &str) -> Result<TokenList, TokenRegistryError> {
        let response = self.http.get(url).send().await?.error_for_status()?;

        response.json::<TokenList>().await.map_err(|e| {
            if e.is_decode() {
                TokenRegistryError::Parse(format!("Failed to parse token list from {}: {}", url, e))
            } else {
                TokenRegistryError::Http(e)
            }
        })
    }
}

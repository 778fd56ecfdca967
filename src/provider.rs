//! Token List Provider
//!
//! Entry point of the library: picks a resolution strategy, runs it against
//! the configured source, and wraps the merged token sequence in a
//! filterable container. Strategy failures propagate untouched.

use crate::container::TokenListContainer;
use crate::error::TokenRegistryError;
use crate::source::{HttpTokenListSource, TokenListSource};
use crate::strategy::Strategy;

/// Resolves the token list through a named strategy
pub struct TokenListProvider {
    source: Box<dyn TokenListSource>,
}

impl TokenListProvider {
    /// Create a provider backed by the HTTP source
    pub fn new() -> Result<Self, TokenRegistryError> {
        Ok(Self {
            source: Box::new(HttpTokenListSource::new()?),
        })
    }

    /// Create a provider with a custom source (used by tests)
    pub fn with_source(source: impl TokenListSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Resolve with the defaults: CDN strategy, empty fallback URL
    pub async fn resolve(&self) -> Result<TokenListContainer, TokenRegistryError> {
        self.resolve_with(Strategy::default(), "").await
    }

    /// Resolve with an explicit strategy and fallback URL
    pub async fn resolve_with(
        &self,
        strategy: Strategy,
        fallback_url: &str,
    ) -> Result<TokenListContainer, TokenRegistryError> {
        let tokens = strategy.resolve(self.source.as_ref(), fallback_url).await?;
        Ok(TokenListContainer::new(tokens))
    }
}

//! Resolution Strategies
//!
//! Four interchangeable ways to pick the primary source URLs for the Solana
//! token list. All strategies share the fetch-with-fallback routine; they
//! differ only in which URLs are treated as primary.

use crate::error::TokenRegistryError;
use crate::fetch::query_json_files;
use crate::source::TokenListSource;
use crate::types::TokenInfo;

const GITHUB_TOKEN_LIST_URL: &str =
    "https://raw.githubusercontent.com/solana-labs/token-list/main/src/tokens/solana.tokenlist.json";
const CDN_TOKEN_LIST_URL: &str =
    "https://cdn.jsdelivr.net/gh/solana-labs/token-list@latest/src/tokens/solana.tokenlist.json";
const SOLANA_TOKEN_LIST_URL: &str = "https://token-list.solana.com/solana.tokenlist.json";

/// Named resolution strategy. The default (CDN) serves the list from a
/// jsDelivr mirror pinned to `latest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Raw file on GitHub
    GitHub,
    /// Caller-supplied fallback URL as the sole source
    Static,
    /// Canonical token-list.solana.com endpoint
    Solana,
    /// jsDelivr CDN mirror
    #[default]
    Cdn,
}

impl Strategy {
    /// Fixed primary source URLs for this strategy. `Static` has none: it
    /// treats the fallback URL as its only source.
    pub fn repositories(&self) -> &'static [&'static str] {
        match self {
            Strategy::GitHub => &[GITHUB_TOKEN_LIST_URL],
            Strategy::Static => &[],
            Strategy::Solana => &[SOLANA_TOKEN_LIST_URL],
            Strategy::Cdn => &[CDN_TOKEN_LIST_URL],
        }
    }

    /// Resolve the token list through `source`, merging every configured
    /// repository (with per-URL fallback) into one flat sequence.
    pub async fn resolve(
        &self,
        source: &dyn TokenListSource,
        fallback_url: &str,
    ) -> Result<Vec<TokenInfo>, TokenRegistryError> {
        match self {
            Strategy::Static => query_json_files(source, &[fallback_url], fallback_url).await,
            _ => query_json_files(source, self.repositories(), fallback_url).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockTokenListSource;

    #[test]
    fn test_default_strategy_is_cdn() {
        assert_eq!(Strategy::default(), Strategy::Cdn);
    }

    #[test]
    fn test_fixed_repositories() {
        assert_eq!(
            Strategy::GitHub.repositories(),
            ["https://raw.githubusercontent.com/solana-labs/token-list/main/src/tokens/solana.tokenlist.json"]
        );
        assert_eq!(
            Strategy::Cdn.repositories(),
            ["https://cdn.jsdelivr.net/gh/solana-labs/token-list@latest/src/tokens/solana.tokenlist.json"]
        );
        assert_eq!(
            Strategy::Solana.repositories(),
            ["https://token-list.solana.com/solana.tokenlist.json"]
        );
        assert!(Strategy::Static.repositories().is_empty());
    }

    #[tokio::test]
    async fn test_static_strategy_uses_fallback_as_primary() {
        let fallback = "https://my-list.example.com/list.json";
        let source = MockTokenListSource::new().with_json(
            fallback,
            r#"{"tokens": [{"chainId": 101, "address": "A", "name": "Foo", "decimals": 6, "symbol": "FOO"}]}"#,
        );

        let tokens = Strategy::Static.resolve(&source, fallback).await.unwrap();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].symbol, "FOO");
        assert_eq!(source.fetched_urls(), vec![fallback]);
    }

    #[tokio::test]
    async fn test_cdn_strategy_fetches_cdn_url() {
        let source = MockTokenListSource::new().with_json(
            "https://cdn.jsdelivr.net/gh/solana-labs/token-list@latest/src/tokens/solana.tokenlist.json",
            r#"{"tokens": []}"#,
        );

        let tokens = Strategy::Cdn.resolve(&source, "").await.unwrap();
        assert!(tokens.is_empty());
        assert_eq!(
            source.fetched_urls(),
            vec!["https://cdn.jsdelivr.net/gh/solana-labs/token-list@latest/src/tokens/solana.tokenlist.json"]
        );
    }
}

//! Errors surfaced while resolving or filtering token lists

use thiserror::Error;

use crate::types::VALID_SLUGS;

/// Errors that can occur when resolving or filtering a token list
#[derive(Debug, Error)]
pub enum TokenRegistryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse token list: {0}")]
    Parse(String),

    /// The fallback fetch failed after a primary source already failed.
    /// There is no further fallback; this fails the whole resolution.
    #[error("Fallback fetch failed after primary source {primary}: {source}")]
    FallbackFailed {
        primary: String,
        #[source]
        source: Box<TokenRegistryError>,
    },

    #[error("Unknown slug: {slug}, please use one of {}", VALID_SLUGS)]
    UnknownSlug { slug: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_slug_message_names_slug_and_valid_set() {
        let err = TokenRegistryError::UnknownSlug {
            slug: "unknown-slug".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("unknown-slug"));
        assert!(message.contains("mainnet-beta, testnet, devnet"));
    }

    #[test]
    fn test_fallback_failed_message_names_primary() {
        let err = TokenRegistryError::FallbackFailed {
            primary: "https://primary.example.com/list.json".to_string(),
            source: Box::new(TokenRegistryError::Parse("not json".to_string())),
        };
        let message = err.to_string();
        assert!(message.contains("https://primary.example.com/list.json"));
        assert!(message.contains("not json"));
    }
}

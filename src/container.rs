//! Token List Container
//!
//! Immutable wrapper around a resolved token sequence. Every filter returns
//! a new container over a freshly allocated sequence; the original is never
//! mutated, so chains of filters can branch freely.

use crate::error::TokenRegistryError;
use crate::types::{Cluster, TokenInfo};

/// Filterable view over an ordered sequence of tokens
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenListContainer {
    tokens: Vec<TokenInfo>,
}

impl TokenListContainer {
    pub fn new(tokens: Vec<TokenInfo>) -> Self {
        Self { tokens }
    }

    /// Keep entries whose tag set contains `tag`. Entries with no tags
    /// behave as having an empty tag set and are excluded.
    pub fn filter_by_tag(&self, tag: &str) -> Self {
        self.filtered(|token| token.has_tag(tag))
    }

    /// Keep entries whose tag set does NOT contain `tag`
    pub fn exclude_by_tag(&self, tag: &str) -> Self {
        self.filtered(|token| !token.has_tag(tag))
    }

    /// Keep entries on the given chain; accepts a raw chain id or a [`Cluster`]
    pub fn filter_by_chain_id(&self, chain_id: impl Into<u32>) -> Self {
        let chain_id = chain_id.into();
        self.filtered(|token| token.chain_id == chain_id)
    }

    /// Keep entries NOT on the given chain
    pub fn exclude_by_chain_id(&self, chain_id: impl Into<u32>) -> Self {
        let chain_id = chain_id.into();
        self.filtered(|token| token.chain_id != chain_id)
    }

    /// Filter by a cluster slug from the fixed slug table. Unknown slugs
    /// are a caller error, reported with the set of valid slugs.
    pub fn filter_by_cluster_slug(&self, slug: &str) -> Result<Self, TokenRegistryError> {
        match Cluster::from_slug(slug) {
            Some(cluster) => Ok(self.filter_by_chain_id(cluster)),
            None => Err(TokenRegistryError::UnknownSlug {
                slug: slug.to_string(),
            }),
        }
    }

    /// The current wrapped sequence
    pub fn get_list(&self) -> &[TokenInfo] {
        &self.tokens
    }

    /// Consume the container, yielding the owned sequence
    pub fn into_list(self) -> Vec<TokenInfo> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn filtered(&self, keep: impl Fn(&TokenInfo) -> bool) -> Self {
        Self {
            tokens: self.tokens.iter().filter(|t| keep(t)).cloned().collect(),
        }
    }
}

//! Token List Data Model
//!
//! Shapes of the remote token list documents published by solana-labs/token-list,
//! plus the fixed cluster slug table. These are plain data types; all logic
//! lives in the fetch routine and the container.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Valid cluster slugs, for error messages
pub const VALID_SLUGS: &str = "mainnet-beta, testnet, devnet";

/// Solana cluster, identified on the wire by its numeric chain id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cluster {
    MainnetBeta,
    Testnet,
    Devnet,
}

impl Cluster {
    pub const ALL: [Cluster; 3] = [Cluster::MainnetBeta, Cluster::Testnet, Cluster::Devnet];

    /// Numeric chain id used in token list entries
    pub const fn chain_id(&self) -> u32 {
        match self {
            Cluster::MainnetBeta => 101,
            Cluster::Testnet => 102,
            Cluster::Devnet => 103,
        }
    }

    /// Human-readable cluster slug
    pub const fn slug(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Testnet => "testnet",
            Cluster::Devnet => "devnet",
        }
    }

    /// Look up a cluster by its slug. The table is fixed; unknown slugs
    /// return `None` and the caller decides how to report them.
    pub fn from_slug(slug: &str) -> Option<Cluster> {
        match slug {
            "mainnet-beta" => Some(Cluster::MainnetBeta),
            "testnet" => Some(Cluster::Testnet),
            "devnet" => Some(Cluster::Devnet),
            _ => None,
        }
    }
}

impl From<Cluster> for u32 {
    fn from(cluster: Cluster) -> u32 {
        cluster.chain_id()
    }
}

/// One remote source's payload. Lives only inside the fetch routine;
/// only `tokens` survives into the merged sequence.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TokenList {
    #[serde(default)]
    pub name: String,
    /// Logo URI for the list itself
    #[serde(rename = "logoURI", default)]
    pub logo_uri: Option<String>,
    /// Tag key -> details, as published by the list
    #[serde(default)]
    pub tags: HashMap<String, TagDetails>,
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Missing field parses as an empty list
    #[serde(default)]
    pub tokens: Vec<TokenInfo>,
}

/// Description of a tag key used by a token list
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TagDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Token metadata record
///
/// Identity is conceptually `(chain_id, address)`, but uniqueness is never
/// enforced: duplicate entries across merged sources are preserved as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Numeric chain id (101 mainnet-beta, 102 testnet, 103 devnet)
    pub chain_id: u32,
    /// Token mint address
    pub address: String,
    /// Token name
    pub name: String,
    /// Number of decimals
    pub decimals: u8,
    /// Token symbol
    pub symbol: String,
    /// Logo URI (optional)
    #[serde(rename = "logoURI", default)]
    pub logo_uri: Option<String>,
    /// Tags (e.g., "stablecoin", "wrapped"); absent means no tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Open set of optional metadata fields
    #[serde(default)]
    pub extensions: Option<TokenExtensions>,
}

impl TokenInfo {
    /// Check whether the entry carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Optional per-token metadata: websites, socials, related contract
/// addresses, Serum market ids, CoinGecko id. Absence is the normal case.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenExtensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_contract: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_contract: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tgann: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tggroup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serum_v3_usdt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serum_v3_usdc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coingecko_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

//! Token Registry - Solana Token List Resolution Library
//!
//! Resolves the community token list from one of several remote JSON
//! sources, with a caller-supplied fallback URL for unreachable sources,
//! and exposes chainable filtering over the resolved collection.
//!
//! # Modules
//!
//! - `types`: token list document shapes and the fixed cluster slug table
//! - `source`: the network seam (`TokenListSource` trait, HTTP implementation)
//! - `strategy`: GitHub / CDN / Solana / Static source selection
//! - `provider`: strategy dispatch, produces a filterable container
//! - `container`: immutable filter/exclude operations over the token sequence
//! - `mocks`: deterministic in-memory source for tests
//!
//! # Example
//!
//! ```no_run
//! use token_registry::{Strategy, TokenListProvider};
//!
//! # async fn run() -> Result<(), token_registry::TokenRegistryError> {
//! let provider = TokenListProvider::new()?;
//! let stablecoins = provider
//!     .resolve_with(Strategy::Cdn, "")
//!     .await?
//!     .filter_by_cluster_slug("mainnet-beta")?
//!     .filter_by_tag("stablecoin");
//! for token in stablecoins.get_list() {
//!     println!("{} ({})", token.name, token.address);
//! }
//! # Ok(())
//! # }
//! ```

pub mod container;
pub mod error;
mod fetch;
pub mod mocks;
pub mod provider;
pub mod source;
pub mod strategy;
pub mod types;

pub use container::TokenListContainer;
pub use error::TokenRegistryError;
pub use provider::TokenListProvider;
pub use source::{HttpSourceConfig, HttpTokenListSource, TokenListSource};
pub use strategy::Strategy;
pub use types::{Cluster, TagDetails, TokenExtensions, TokenInfo, TokenList};

//! Fetch-With-Fallback Routine
//!
//! Retrieves every primary URL concurrently, swapping in the fallback URL
//! for any source that fails to fetch or parse. All branches run to a final
//! state before results are combined: the merge happens behind a join
//! barrier, so one slow source never reorders the output and one failed
//! source fails the whole resolution only after every branch has settled.

use futures::future;

use crate::error::TokenRegistryError;
use crate::source::TokenListSource;
use crate::types::{TokenInfo, TokenList};

/// Fetch every URL in `urls`, substituting `fallback_url` for failures, and
/// concatenate the `tokens` of the resulting documents in source order.
pub(crate) async fn query_json_files(
    source: &dyn TokenListSource,
    urls: &[&str],
    fallback_url: &str,
) -> Result<Vec<TokenInfo>, TokenRegistryError> {
    let fetches = urls
        .iter()
        .map(|&url| fetch_with_fallback(source, url, fallback_url));

    // join_all settles every branch; order follows `urls`, not completion
    let settled = future::join_all(fetches).await;

    let mut tokens = Vec::new();
    for result in settled {
        tokens.extend(result?.tokens);
    }
    Ok(tokens)
}

async fn fetch_with_fallback(
    source: &dyn TokenListSource,
    url: &str,
    fallback_url: &str,
) -> Result<TokenList, TokenRegistryError> {
    match source.fetch_list(url).await {
        Ok(list) => Ok(list),
        Err(err) => {
            tracing::info!(url, error = %err, "Primary source failed, falling back to fallback url");
            source
                .fetch_list(fallback_url)
                .await
                .map_err(|fallback_err| TokenRegistryError::FallbackFailed {
                    primary: url.to_string(),
                    source: Box::new(fallback_err),
                })
        }
    }
}

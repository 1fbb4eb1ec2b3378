//! Item retrieval from news and social providers
//!
//! Provider failures never abort an analysis: the fetcher substitutes a
//! deterministic mock batch and tags the outcome as `Fallback` so the
//! caller can badge degraded results. Graceful degrade only, no retries.

pub mod mock;
pub mod news;
pub mod social;

use tracing::{info, warn};

use crate::config::FetchConfig;
use crate::types::{FetchOutcome, Provider, RawItem};

pub use news::NewsClient;
pub use social::SocialClient;

/// Front door for all item retrieval
pub struct Fetcher {
    news: NewsClient,
    social: SocialClient,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            news: NewsClient::new(config),
            social: SocialClient::new(),
        }
    }

    /// Fetch up to `limit` items for `query` from one provider.
    ///
    /// Never fails: a news provider error or empty result yields the
    /// deterministic fallback batch instead.
    pub async fn fetch(&self, query: &str, limit: usize, provider: Provider) -> FetchOutcome {
        match provider {
            Provider::News => match self.news.search(query, limit).await {
                Ok(items) if !items.is_empty() => {
                    info!(count = items.len(), query, "fetched live news items");
                    FetchOutcome::Live(cap(items, limit))
                }
                Ok(_) => {
                    warn!(query, "news provider returned no items, substituting mock data");
                    FetchOutcome::Fallback(cap(mock::fallback_items(query, limit), limit))
                }
                Err(e) => {
                    warn!(query, error = %e, "news fetch failed, substituting mock data");
                    FetchOutcome::Fallback(cap(mock::fallback_items(query, limit), limit))
                }
            },
            // The social provider is a fixed mock by design; its posts are
            // its live data source, not a degraded substitute.
            Provider::Social => {
                let items = self.social.recent_posts(query, limit);
                info!(count = items.len(), query, "fetched social posts");
                FetchOutcome::Live(cap(items, limit))
            }
        }
    }
}

/// Cap a provider response at the requested limit.
fn cap(mut items: Vec<RawItem>, limit: usize) -> Vec<RawItem> {
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchConfig;

    fn unreachable_config() -> FetchConfig {
        FetchConfig {
            // Reserved TEST-NET-1 address, nothing listens there
            news_url: "http://192.0.2.1/rss/search".to_string(),
            timeout_secs: 1,
            user_agent: "sentiment-pulse-test".to_string(),
        }
    }

    #[tokio::test]
    async fn test_news_failure_falls_back_to_mock() {
        let fetcher = Fetcher::new(&unreachable_config());
        let outcome = fetcher.fetch("climate", 5, Provider::News).await;

        assert!(outcome.is_fallback());
        assert!(!outcome.items().is_empty());
        assert!(outcome.items().len() <= 5);
    }

    #[tokio::test]
    async fn test_fallback_nonempty_for_limit_one() {
        let fetcher = Fetcher::new(&unreachable_config());
        let outcome = fetcher.fetch("anything", 1, Provider::News).await;
        assert_eq!(outcome.items().len(), 1);
    }

    #[tokio::test]
    async fn test_social_is_live_mock() {
        let fetcher = Fetcher::new(&unreachable_config());
        let outcome = fetcher.fetch("elections", 4, Provider::Social).await;

        assert!(!outcome.is_fallback());
        assert_eq!(outcome.items().len(), 4);
        assert!(outcome
            .items()
            .iter()
            .all(|i| i.provider == Provider::Social));
    }

    #[test]
    fn test_cap_truncates() {
        let items = mock::fallback_items("q", 10);
        assert!(cap(items, 3).len() <= 3);
    }
}

//! Google News RSS client
//!
//! Issues a keyword search against the Google News RSS endpoint and maps
//! the feed entries into [`RawItem`]s at the fetch boundary. Unknown or
//! missing feed fields are defaulted here instead of leaking onward.

use chrono::{DateTime, Utc};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::FetchConfig;
use crate::error::{PulseError, Result};
use crate::types::{Provider, RawItem};

pub struct NewsClient {
    client: Client,
    base_url: String,
}

impl NewsClient {
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .user_agent(config.user_agent.clone())
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: config.news_url.clone(),
        }
    }

    /// Search recent headlines for `query`, capped at `limit`.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<RawItem>> {
        let url = format!(
            "{}?q={}&hl=en-US&gl=US&ceid=US:en",
            self.base_url,
            urlencoding::encode(query)
        );

        debug!(url, "requesting news feed");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(PulseError::Fetch(format!(
                "news provider returned status {}",
                response.status()
            )));
        }

        let body = response.bytes().await?;
        let channel = rss::Channel::read_from(&body[..])
            .map_err(|e| PulseError::Feed(e.to_string()))?;

        let items = channel
            .items()
            .iter()
            .take(limit)
            .map(map_feed_item)
            .collect();

        Ok(items)
    }
}

/// Map one feed entry into the internal item shape, defaulting whatever
/// the feed left out.
fn map_feed_item(entry: &rss::Item) -> RawItem {
    let source_name = entry
        .source()
        .and_then(|s| s.title())
        .unwrap_or("Google News")
        .to_string();

    RawItem {
        text: entry.title().unwrap_or_default().to_string(),
        source_name,
        published_at: entry.pub_date().and_then(parse_pub_date),
        url: entry.link().map(str::to_string),
        provider: Provider::News,
    }
}

/// RSS dates are RFC 2822; anything else is treated as absent.
fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pub_date_rfc2822() {
        let parsed = parse_pub_date("Tue, 19 Aug 2025 14:00:00 GMT").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2025-08-19T14:00:00+00:00");
    }

    #[test]
    fn test_parse_pub_date_garbage() {
        assert!(parse_pub_date("next Tuesday").is_none());
        assert!(parse_pub_date("").is_none());
    }

    #[test]
    fn test_map_feed_item_defaults_missing_fields() {
        let entry = rss::Item::default();
        let item = map_feed_item(&entry);

        assert_eq!(item.text, "");
        assert_eq!(item.source_name, "Google News");
        assert!(item.published_at.is_none());
        assert!(item.url.is_none());
        assert_eq!(item.provider, Provider::News);
    }

    #[test]
    fn test_map_feed_item_full_entry() {
        let mut entry = rss::Item::default();
        entry.set_title("Markets rally on strong earnings".to_string());
        entry.set_link("https://example.com/story".to_string());
        entry.set_pub_date("Tue, 19 Aug 2025 14:00:00 GMT".to_string());
        let mut source = rss::Source::default();
        source.set_url("https://example.com".to_string());
        source.set_title("Example Wire".to_string());
        entry.set_source(source);

        let item = map_feed_item(&entry);
        assert_eq!(item.text, "Markets rally on strong earnings");
        assert_eq!(item.source_name, "Example Wire");
        assert_eq!(item.url.as_deref(), Some("https://example.com/story"));
        assert!(item.published_at.is_some());
    }

    #[test]
    fn test_search_url_encodes_query() {
        let encoded = urlencoding::encode("climate change & policy");
        assert_eq!(encoded, "climate%20change%20%26%20policy");
    }
}

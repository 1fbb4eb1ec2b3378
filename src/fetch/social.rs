//! Social posts provider
//!
//! Live social APIs are rate-limited and unreliable for an interactive
//! tool, so this provider serves a fixed set of plausible posts built
//! around the query. Same contract as the news provider.

use chrono::{Duration, Utc};

use crate::types::{Provider, RawItem};

/// Post templates with varied sentiment, `{}` replaced by the query
const POST_TEMPLATES: &[(&str, &str)] = &[
    (
        "Honestly impressed by the progress on {} lately, great to see",
        "@daily_takes",
    ),
    (
        "Everyone hyping {} but the real problems are not being discussed",
        "@contrarian_view",
    ),
    (
        "Reading up on {} this week. Interesting stuff, still forming an opinion",
        "@slow_reader",
    ),
    (
        "The {} situation is a disaster and nobody wants to admit it",
        "@doom_poster",
    ),
    (
        "Big win for {} today. This is the breakthrough we hoped for",
        "@optimist_hq",
    ),
    (
        "Can we stop pretending {} is fine? The warning signs are everywhere",
        "@risk_watcher",
    ),
    (
        "New report on {} out this morning, numbers look stable",
        "@data_digest",
    ),
    (
        "Love how {} keeps improving. Credit where credit is due",
        "@fair_play",
    ),
    (
        "Another week, another {} controversy. Getting tired of this",
        "@weary_observer",
    ),
    (
        "{} update: nothing dramatic, steady as expected",
        "@plain_facts",
    ),
];

pub struct SocialClient;

impl SocialClient {
    pub fn new() -> Self {
        Self
    }

    /// Return up to `limit` recent posts mentioning `query`, newest first,
    /// spaced six hours apart.
    pub fn recent_posts(&self, query: &str, limit: usize) -> Vec<RawItem> {
        let now = Utc::now();

        POST_TEMPLATES
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, (template, account))| RawItem {
                text: template.replace("{}", query),
                source_name: account.to_string(),
                published_at: Some(now - Duration::hours(6 * i as i64)),
                url: None,
                provider: Provider::Social,
            })
            .collect()
    }
}

impl Default for SocialClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_mention_query() {
        let posts = SocialClient::new().recent_posts("solar power", 10);
        assert_eq!(posts.len(), 10);
        assert!(posts.iter().all(|p| p.text.contains("solar power")));
        assert!(posts.iter().all(|p| p.provider == Provider::Social));
    }

    #[test]
    fn test_limit_respected() {
        let posts = SocialClient::new().recent_posts("q", 3);
        assert_eq!(posts.len(), 3);
    }

    #[test]
    fn test_limit_beyond_templates() {
        let posts = SocialClient::new().recent_posts("q", 50);
        assert_eq!(posts.len(), POST_TEMPLATES.len());
    }

    #[test]
    fn test_posts_have_descending_timestamps() {
        let posts = SocialClient::new().recent_posts("q", 5);
        for pair in posts.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
    }
}

//! Analysis pipeline
//!
//! One synchronous request/response cycle: validate the request, fetch
//! from each enabled provider in turn, normalize, score, aggregate. Each
//! run produces a fresh dataset; nothing is shared between runs.

use tracing::info;

use crate::aggregate::Aggregate;
use crate::config::LimitsConfig;
use crate::error::{PulseError, Result};
use crate::fetch::Fetcher;
use crate::normalize::normalize;
use crate::sentiment::SentimentAnalyzer;
use crate::types::{Provider, RawItem, ScoredItem};

/// One user-triggered analysis request
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub query: String,
    pub news_limit: usize,
    pub social_limit: usize,
    pub include_social: bool,
}

impl AnalysisRequest {
    /// Reject malformed input before any provider is contacted.
    pub fn validate(&self, limits: &LimitsConfig) -> Result<()> {
        if self.query.trim().is_empty() {
            return Err(PulseError::Input("query must not be empty".to_string()));
        }
        if self.news_limit == 0 {
            return Err(PulseError::Input(
                "news limit must be at least 1".to_string(),
            ));
        }
        if self.include_social && self.social_limit == 0 {
            return Err(PulseError::Input(
                "social limit must be at least 1".to_string(),
            ));
        }
        let requested = self.news_limit.max(self.social_limit);
        if requested > limits.max_limit {
            return Err(PulseError::Input(format!(
                "limit {} exceeds maximum {}",
                requested, limits.max_limit
            )));
        }
        Ok(())
    }
}

/// Result of one pipeline run, immutable once produced
#[derive(Debug, Clone)]
pub struct Analysis {
    pub query: String,
    pub dataset: Vec<ScoredItem>,
    pub aggregate: Aggregate,
    /// Providers whose results were substituted with mock data
    pub fallback_providers: Vec<Provider>,
}

/// Score a batch of normalized items with a shared analyzer.
pub fn score_items(analyzer: &SentimentAnalyzer, items: Vec<RawItem>) -> Vec<ScoredItem> {
    items
        .into_iter()
        .map(|item| {
            let scores = analyzer.polarity_scores(&item.text);
            ScoredItem::new(item, scores)
        })
        .collect()
}

/// Run the full fetch → normalize → score → aggregate pipeline.
pub async fn run(
    request: &AnalysisRequest,
    fetcher: &Fetcher,
    analyzer: &SentimentAnalyzer,
    limits: &LimitsConfig,
) -> Result<Analysis> {
    request.validate(limits)?;

    let mut raw: Vec<RawItem> = Vec::new();
    let mut fallback_providers = Vec::new();

    let outcome = fetcher
        .fetch(&request.query, request.news_limit, Provider::News)
        .await;
    if outcome.is_fallback() {
        fallback_providers.push(Provider::News);
    }
    raw.extend(outcome.into_items());

    if request.include_social {
        let outcome = fetcher
            .fetch(&request.query, request.social_limit, Provider::Social)
            .await;
        if outcome.is_fallback() {
            fallback_providers.push(Provider::Social);
        }
        raw.extend(outcome.into_items());
    }

    let normalized = normalize(raw);
    let dataset = score_items(analyzer, normalized);
    let aggregate = Aggregate::compute(&dataset);

    info!(
        query = request.query,
        items = dataset.len(),
        positive = aggregate.counts.positive,
        neutral = aggregate.counts.neutral,
        negative = aggregate.counts.negative,
        "analysis complete"
    );

    Ok(Analysis {
        query: request.query.clone(),
        dataset,
        aggregate,
        fallback_providers,
    })
}

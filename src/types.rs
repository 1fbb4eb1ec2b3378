//! Core data types shared across the pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where an item came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    News,
    Social,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::News => write!(f, "news"),
            Provider::Social => write!(f, "social"),
        }
    }
}

/// Sentiment classification of a single item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Neutral,
    Negative,
}

impl Label {
    /// Classify a compound score using the standard VADER thresholds.
    /// All label assignment in the pipeline goes through here.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            Label::Positive
        } else if compound <= -0.05 {
            Label::Negative
        } else {
            Label::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "positive",
            Label::Neutral => "neutral",
            Label::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fetched text item before scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    /// Headline or post body
    pub text: String,
    /// Publisher or account name
    pub source_name: String,
    /// Publication time, when the provider supplied one
    pub published_at: Option<DateTime<Utc>>,
    /// Link to the original item
    pub url: Option<String>,
    /// Originating provider
    pub provider: Provider,
}

/// Polarity proportions plus the normalized compound score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Negative proportion (0.0 to 1.0)
    pub neg: f64,
    /// Neutral proportion (0.0 to 1.0)
    pub neu: f64,
    /// Positive proportion (0.0 to 1.0)
    pub pos: f64,
    /// Normalized aggregate polarity (-1.0 to 1.0)
    pub compound: f64,
}

/// A fetched item with its sentiment scores attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: RawItem,
    #[serde(flatten)]
    pub scores: SentimentScores,
    pub label: Label,
}

impl ScoredItem {
    pub fn new(item: RawItem, scores: SentimentScores) -> Self {
        let label = Label::from_compound(scores.compound);
        Self {
            item,
            scores,
            label,
        }
    }
}

/// Result of a single provider fetch.
///
/// Callers can tell degraded results apart from live ones without relying
/// on error interception; a fallback batch still flows through the rest of
/// the pipeline unchanged.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Items retrieved from the live provider
    Live(Vec<RawItem>),
    /// Deterministic mock substitute after a provider failure
    Fallback(Vec<RawItem>),
}

impl FetchOutcome {
    pub fn items(&self) -> &[RawItem] {
        match self {
            FetchOutcome::Live(items) | FetchOutcome::Fallback(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<RawItem> {
        match self {
            FetchOutcome::Live(items) | FetchOutcome::Fallback(items) => items,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchOutcome::Fallback(_))
    }
}

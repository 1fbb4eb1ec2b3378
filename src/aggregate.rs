//! Summary statistics over a scored dataset
//!
//! Recomputed wholesale from the dataset on each run. Pure and total: an
//! empty dataset aggregates to zeros and empty tables, never an error.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::types::{Label, ScoredItem};

/// Number of compound-score histogram bins over [-1, 1]
const HISTOGRAM_BINS: usize = 8;

/// Word-frequency table cutoff
const TOP_WORDS: usize = 50;

/// Minimum token length counted in the word-frequency table
const MIN_TOKEN_LEN: usize = 3;

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "are", "but", "not", "you", "all", "can", "has",
        "had", "have", "was", "were", "will", "with", "this", "that", "these",
        "those", "from", "they", "them", "their", "there", "here", "what",
        "when", "where", "which", "while", "who", "whom", "why", "how", "its",
        "it's", "into", "onto", "over", "under", "after", "before", "about",
        "above", "below", "between", "during", "through", "out", "off", "more",
        "most", "some", "such", "only", "than", "then", "too", "very", "just",
        "been", "being", "because", "does", "did", "his", "her", "she", "him",
        "our", "your", "new", "says", "said",
    ]
    .into_iter()
    .collect()
});

/// Per-label item counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl LabelCounts {
    pub fn add(&mut self, label: Label) {
        match label {
            Label::Positive => self.positive += 1,
            Label::Neutral => self.neutral += 1,
            Label::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    pub fn pct(&self, label: Label) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let count = match label {
            Label::Positive => self.positive,
            Label::Neutral => self.neutral,
            Label::Negative => self.negative,
        };
        count as f64 / total as f64 * 100.0
    }
}

/// One bin of the compound-score distribution
#[derive(Debug, Clone, Serialize)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Mean compound for one UTC day
#[derive(Debug, Clone, Serialize)]
pub struct DailySentiment {
    pub date: NaiveDate,
    pub mean_compound: f64,
    pub count: usize,
}

/// Everything the presentation layer renders
#[derive(Debug, Clone, Serialize)]
pub struct Aggregate {
    pub total: usize,
    pub counts: LabelCounts,
    pub mean_compound: f64,
    /// Compound-score distribution over [-1, 1]
    pub histogram: Vec<HistogramBin>,
    /// Stopword-filtered token frequencies, most frequent first
    pub word_freq: Vec<(String, usize)>,
    /// Daily mean compound over items that carry timestamps
    pub timeline: Vec<DailySentiment>,
    /// Label counts per source, busiest source first
    pub by_source: Vec<(String, LabelCounts)>,
}

impl Aggregate {
    pub fn compute(items: &[ScoredItem]) -> Self {
        let total = items.len();

        let mut counts = LabelCounts::default();
        let mut compound_sum = 0.0;
        let mut histogram = empty_histogram();
        let mut words: HashMap<String, usize> = HashMap::new();
        let mut days: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
        let mut sources: HashMap<String, LabelCounts> = HashMap::new();

        for scored in items {
            counts.add(scored.label);
            compound_sum += scored.scores.compound;

            let bin = histogram_index(scored.scores.compound);
            histogram[bin].count += 1;

            for token in tokens(&scored.item.text) {
                *words.entry(token).or_insert(0) += 1;
            }

            // Items without a parseable timestamp stay out of the timeline
            // but count everywhere else.
            if let Some(ts) = scored.item.published_at {
                let entry = days.entry(ts.date_naive()).or_insert((0.0, 0));
                entry.0 += scored.scores.compound;
                entry.1 += 1;
            }

            sources
                .entry(scored.item.source_name.clone())
                .or_default()
                .add(scored.label);
        }

        let mean_compound = if total > 0 {
            compound_sum / total as f64
        } else {
            0.0
        };

        let mut word_freq: Vec<(String, usize)> = words.into_iter().collect();
        word_freq.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        word_freq.truncate(TOP_WORDS);

        let timeline = days
            .into_iter()
            .map(|(date, (sum, count))| DailySentiment {
                date,
                mean_compound: sum / count as f64,
                count,
            })
            .collect();

        let mut by_source: Vec<(String, LabelCounts)> = sources.into_iter().collect();
        by_source.sort_by(|a, b| b.1.total().cmp(&a.1.total()).then_with(|| a.0.cmp(&b.0)));

        Self {
            total,
            counts,
            mean_compound,
            histogram,
            word_freq,
            timeline,
            by_source,
        }
    }
}

fn empty_histogram() -> Vec<HistogramBin> {
    let width = 2.0 / HISTOGRAM_BINS as f64;
    (0..HISTOGRAM_BINS)
        .map(|i| HistogramBin {
            lo: -1.0 + i as f64 * width,
            hi: -1.0 + (i + 1) as f64 * width,
            count: 0,
        })
        .collect()
}

/// Bin index for a compound score; 1.0 lands in the last bin.
fn histogram_index(compound: f64) -> usize {
    let width = 2.0 / HISTOGRAM_BINS as f64;
    let idx = ((compound + 1.0) / width) as usize;
    idx.min(HISTOGRAM_BINS - 1)
}

/// Lowercased alphanumeric tokens worth counting in a word cloud.
fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| {
            w.len() >= MIN_TOKEN_LEN
                && !STOPWORDS.contains(w.as_str())
                && !w.chars().all(|c| c.is_ascii_digit())
        })
}

//! Lexicon-based sentiment scoring
//!
//! A VADER-style polarity model: pre-weighted word valences plus rule
//! adjustments for negation and intensity. No training involved; the
//! lexicon ships with the binary and is parsed once per process.

pub mod analyzer;

pub use analyzer::SentimentAnalyzer;

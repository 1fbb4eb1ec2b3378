//! Multi-Source Sentiment Pulse
//!
//! Fetches recent headlines and social posts for a query, scores each item
//! with a lexicon-based sentiment analyzer, and aggregates the results for
//! rendering and export.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod sentiment;
pub mod types;

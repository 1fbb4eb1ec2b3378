//! Dataset export
//!
//! Serializes the per-item scored table to CSV and JSON with the same
//! field set, so a re-parsed export matches the in-memory dataset.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{PulseError, Result};
use crate::types::ScoredItem;

const CSV_HEADER: [&str; 10] = [
    "text",
    "source",
    "published_at",
    "url",
    "provider",
    "neg",
    "neu",
    "pos",
    "compound",
    "label",
];

/// Write the dataset as CSV, one row per item plus a header row.
pub fn write_csv<W: Write>(items: &[ScoredItem], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for scored in items {
        let published = scored
            .item
            .published_at
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();

        let provider = scored.item.provider.to_string();
        let neg = format!("{:.4}", scored.scores.neg);
        let neu = format!("{:.4}", scored.scores.neu);
        let pos = format!("{:.4}", scored.scores.pos);
        let compound = format!("{:.4}", scored.scores.compound);

        csv_writer.write_record([
            scored.item.text.as_str(),
            scored.item.source_name.as_str(),
            published.as_str(),
            scored.item.url.as_deref().unwrap_or_default(),
            provider.as_str(),
            neg.as_str(),
            neu.as_str(),
            pos.as_str(),
            compound.as_str(),
            scored.label.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// CSV export as an in-memory string.
pub fn csv_string(items: &[ScoredItem]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(items, &mut buf)?;
    String::from_utf8(buf).map_err(|e| {
        PulseError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// JSON export: an array of objects with the full ScoredItem field set.
pub fn json_string(items: &[ScoredItem]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

pub fn write_csv_file<P: AsRef<Path>>(items: &[ScoredItem], path: P) -> Result<()> {
    let file = File::create(path)?;
    write_csv(items, file)
}

pub fn write_json_file<P: AsRef<Path>>(items: &[ScoredItem], path: P) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(json_string(items)?.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Provider, RawItem, SentimentScores};
    use chrono::{TimeZone, Utc};

    fn sample_items() -> Vec<ScoredItem> {
        vec![
            ScoredItem::new(
                RawItem {
                    text: "Plain headline".to_string(),
                    source_name: "Wire".to_string(),
                    published_at: Some(Utc.with_ymd_and_hms(2025, 8, 20, 9, 30, 0).unwrap()),
                    url: Some("https://example.com/1".to_string()),
                    provider: Provider::News,
                },
                SentimentScores {
                    neg: 0.0,
                    neu: 0.7,
                    pos: 0.3,
                    compound: 0.42,
                },
            ),
            ScoredItem::new(
                RawItem {
                    text: "Headline with, comma and \"quotes\"".to_string(),
                    source_name: "@poster".to_string(),
                    published_at: None,
                    url: None,
                    provider: Provider::Social,
                },
                SentimentScores {
                    neg: 0.5,
                    neu: 0.5,
                    pos: 0.0,
                    compound: -0.3,
                },
            ),
        ]
    }

    #[test]
    fn test_csv_row_count() {
        let csv = csv_string(&sample_items()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3); // header + 2 rows
        assert_eq!(lines[0], CSV_HEADER.join(","));
    }

    #[test]
    fn test_csv_quotes_embedded_commas() {
        let csv = csv_string(&sample_items()).unwrap();
        assert!(csv.contains("\"Headline with, comma and \"\"quotes\"\"\""));
    }

    #[test]
    fn test_csv_empty_dataset_is_header_only() {
        let csv = csv_string(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_json_round_trip() {
        let items = sample_items();
        let json = json_string(&items).unwrap();
        let parsed: Vec<ScoredItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, items);
    }

    #[test]
    fn test_json_field_set() {
        let json = json_string(&sample_items()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &value[0];
        for field in ["text", "source_name", "published_at", "url", "provider", "neg", "neu", "pos", "compound", "label"] {
            assert!(first.get(field).is_some(), "missing field {}", field);
        }
    }
}

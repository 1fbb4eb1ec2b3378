//! Text cleaning and deduplication
//!
//! Pure and total: any sequence of fetched items comes out as a cleaned,
//! de-duplicated sequence, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::types::RawItem;

/// Longest text kept for analysis; headlines are far shorter, social
/// posts occasionally are not.
const MAX_TEXT_LEN: usize = 500;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<[^>]+>").unwrap());
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());
static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip markup, URLs and excess whitespace from one text.
pub fn clean_text(text: &str) -> String {
    let without_tags = TAG_RE.replace_all(text, " ");
    let unescaped = html_escape::decode_html_entities(&without_tags).to_string();
    let without_urls = URL_RE.replace_all(&unescaped, " ");
    let folded = WS_RE.replace_all(without_urls.trim(), " ");

    let mut out = folded.trim().to_string();
    if out.len() > MAX_TEXT_LEN {
        // Cut on a char boundary, then back to the last full word.
        let mut cut = MAX_TEXT_LEN;
        while !out.is_char_boundary(cut) {
            cut -= 1;
        }
        out.truncate(cut);
        if let Some(idx) = out.rfind(' ') {
            out.truncate(idx);
        }
    }
    out
}

/// Clean every item, drop the ones left empty, and remove exact-duplicate
/// texts keeping first occurrence order.
pub fn normalize(items: Vec<RawItem>) -> Vec<RawItem> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(items.len());

    for mut item in items {
        let cleaned = clean_text(&item.text);
        if cleaned.is_empty() {
            continue;
        }
        if !seen.insert(cleaned.clone()) {
            continue;
        }
        item.text = cleaned;
        out.push(item);
    }

    out
}

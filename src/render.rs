//! Terminal presentation
//!
//! Renders the current aggregate and dataset. No business logic lives
//! here; everything printed is read straight off the pipeline output.

use crate::aggregate::Aggregate;
use crate::pipeline::Analysis;
use crate::types::Label;

const BAR_WIDTH: usize = 40;
const TEXT_COL_WIDTH: usize = 60;

/// Render the whole analysis: summary, charts, then the per-item table.
pub fn print_analysis(analysis: &Analysis) {
    print_summary(analysis);
    print_distribution(&analysis.aggregate);
    print_word_freq(&analysis.aggregate, 15);
    print_timeline(&analysis.aggregate);
    print_by_source(&analysis.aggregate);
    print_table(analysis);
}

pub fn print_summary(analysis: &Analysis) {
    let agg = &analysis.aggregate;

    println!("\n📊 Sentiment for \"{}\"\n", analysis.query);

    if !analysis.fallback_providers.is_empty() {
        let names: Vec<String> = analysis
            .fallback_providers
            .iter()
            .map(|p| p.to_string())
            .collect();
        println!("⚠️  Mock data substituted for: {}\n", names.join(", "));
    }

    println!("Items analyzed: {}", agg.total);
    println!(
        "Positive: {:>4} ({:.1}%)",
        agg.counts.positive,
        agg.counts.pct(Label::Positive)
    );
    println!(
        "Neutral:  {:>4} ({:.1}%)",
        agg.counts.neutral,
        agg.counts.pct(Label::Neutral)
    );
    println!(
        "Negative: {:>4} ({:.1}%)",
        agg.counts.negative,
        agg.counts.pct(Label::Negative)
    );
    println!("Mean compound: {:+.4}", agg.mean_compound);
}

pub fn print_distribution(agg: &Aggregate) {
    if agg.total == 0 {
        return;
    }

    println!("\n📈 Compound score distribution\n");

    let max = agg.histogram.iter().map(|b| b.count).max().unwrap_or(0);
    for bin in &agg.histogram {
        println!(
            "[{:+.2} .. {:+.2}] {:<width$} {}",
            bin.lo,
            bin.hi,
            bar(bin.count, max),
            bin.count,
            width = BAR_WIDTH
        );
    }
}

pub fn print_word_freq(agg: &Aggregate, top: usize) {
    if agg.word_freq.is_empty() {
        return;
    }

    println!("\n🔤 Top words\n");

    let max = agg.word_freq.first().map(|(_, c)| *c).unwrap_or(0);
    for (word, count) in agg.word_freq.iter().take(top) {
        println!("{:<20} {:<width$} {}", word, bar(*count, max), count, width = BAR_WIDTH);
    }
}

pub fn print_timeline(agg: &Aggregate) {
    if agg.timeline.is_empty() {
        return;
    }

    println!("\n📅 Daily mean compound\n");

    for day in &agg.timeline {
        // Scale [-1, 1] onto the bar, anchored at the left edge
        let scaled = (((day.mean_compound + 1.0) / 2.0) * BAR_WIDTH as f64).round() as usize;
        println!(
            "{}  {:<width$} {:+.3} ({} items)",
            day.date,
            "█".repeat(scaled.min(BAR_WIDTH)),
            day.mean_compound,
            day.count,
            width = BAR_WIDTH
        );
    }
}

pub fn print_by_source(agg: &Aggregate) {
    if agg.by_source.is_empty() {
        return;
    }

    println!("\n🗞  Per-source breakdown\n");
    println!(
        "{:<24} {:>6} {:>6} {:>6} {:>6}",
        "Source", "Total", "Pos", "Neu", "Neg"
    );
    println!("{}", "-".repeat(52));

    for (source, counts) in &agg.by_source {
        println!(
            "{:<24} {:>6} {:>6} {:>6} {:>6}",
            clip(source, 24),
            counts.total(),
            counts.positive,
            counts.neutral,
            counts.negative
        );
    }
}

pub fn print_table(analysis: &Analysis) {
    if analysis.dataset.is_empty() {
        println!("\nNo items to display.");
        return;
    }

    println!("\n📋 Scored items\n");
    println!(
        "{:<width$} {:<16} {:>9} {:>9}",
        "Text",
        "Source",
        "Compound",
        "Label",
        width = TEXT_COL_WIDTH
    );
    println!("{}", "-".repeat(TEXT_COL_WIDTH + 38));

    for scored in &analysis.dataset {
        println!(
            "{:<width$} {:<16} {:>+9.4} {:>9}",
            clip(&scored.item.text, TEXT_COL_WIDTH),
            clip(&scored.item.source_name, 16),
            scored.scores.compound,
            scored.label.as_str(),
            width = TEXT_COL_WIDTH
        );
    }
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count as f64 / max as f64 * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.min(BAR_WIDTH))
}

/// Shorten to `max` characters with an ellipsis, safe on multi-byte text.
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", clipped)
}

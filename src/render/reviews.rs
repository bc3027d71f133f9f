//! Sentiment analysis view for the review collection.
//!
//! Three display states, driven only by the month selection and the dataset
//! contents: no reviews at all, a month with no matching rows, or a full
//! render (chart, keyword summary, optional detail table).

use anyhow::Result;
use std::fmt::Write;

use crate::analysis::aggregate::{aggregate, score_reviews};
use crate::analysis::filter::{TARGET_YEAR, filter_by_month, month_ordinal};
use crate::analysis::keywords::keyword_frequencies;
use crate::analysis::sentiment::Sentiment;
use crate::analysis::types::{ScoredReview, SentimentBreakdown};
use crate::dataset::Review;
use crate::render::{BAR_WIDTH, bar};

/// How many keywords the summary block shows at most.
const KEYWORD_LIMIT: usize = 15;

/// Runs the full pipeline for `month` and renders the view.
///
/// Returns an error only for an unknown month name; empty data states render
/// an in-place message. The whole pipeline reruns on every call, so the
/// confidence column changes between renders by design.
pub fn render_reviews(reviews: &[Review], month: &str, show_details: bool) -> Result<String> {
    let ordinal = month_ordinal(month)?;
    let mut out = String::new();

    writeln!(out, "== Review analysis for {TARGET_YEAR} ==").unwrap();

    if reviews.is_empty() {
        writeln!(out, "No review data available.").unwrap();
        return Ok(out);
    }

    let filtered = filter_by_month(reviews, ordinal);
    if filtered.is_empty() {
        writeln!(out, "No reviews were recorded in {month} {TARGET_YEAR}.").unwrap();
        return Ok(out);
    }

    let scored = score_reviews(&filtered, &mut rand::thread_rng());
    let breakdown = aggregate(&scored, month);

    write_chart(&mut out, &breakdown);
    write_keywords(&mut out, &scored);
    write_details(&mut out, &scored, show_details);

    Ok(out)
}

/// Two-category horizontal bar chart; each bar carries its tooltip inline
/// (label, count, mean confidence as a percentage).
fn write_chart(out: &mut String, breakdown: &SentimentBreakdown) {
    writeln!(out, "\nSentiment for {} ({} reviews)", breakdown.month, breakdown.total).unwrap();

    let max = breakdown
        .positive
        .count
        .max(breakdown.negative.count);

    for sentiment in [Sentiment::Positive, Sentiment::Negative] {
        let agg = breakdown.label(sentiment);
        writeln!(
            out,
            "{:<8} {:<BAR_WIDTH$} {} (avg confidence {:.2}%)",
            sentiment.as_str(),
            bar(agg.count, max, BAR_WIDTH),
            agg.count,
            agg.avg_confidence * 100.0,
        )
        .unwrap();
    }
}

/// Frequency-weighted keyword block; degrades to a fallback line when the
/// corpus yields nothing, without affecting the chart or table.
fn write_keywords(out: &mut String, scored: &[ScoredReview]) {
    writeln!(out, "\nTop keywords").unwrap();

    let keywords = keyword_frequencies(scored.iter().map(|r| r.text.as_str()), KEYWORD_LIMIT);
    if keywords.is_empty() {
        writeln!(out, "Not enough text for a keyword summary.").unwrap();
        return;
    }

    let max = keywords[0].count;
    let word_width = keywords
        .iter()
        .map(|k| k.word.chars().count())
        .max()
        .unwrap_or(4);

    for keyword in &keywords {
        writeln!(
            out,
            "{:<word_width$} {} {}",
            keyword.word,
            bar(keyword.count, max, 20),
            keyword.count,
        )
        .unwrap();
    }
}

/// Detail table behind a disclosure: hidden by default, a hint line tells the
/// user how to expand it.
fn write_details(out: &mut String, scored: &[ScoredReview], show_details: bool) {
    if !show_details {
        writeln!(
            out,
            "\n({} detail rows hidden; pass --details to show them)",
            scored.len()
        )
        .unwrap();
        return;
    }

    writeln!(out, "\ndate        rating  sentiment  confidence  text").unwrap();
    for row in scored {
        writeln!(
            out,
            "{}  {:<6}  {:<9}  {:<10}  {}",
            row.date,
            row.rating,
            row.sentiment.as_str(),
            row.confidence_percent(),
            row.text,
        )
        .unwrap();
    }
}

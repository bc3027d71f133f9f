//! Data types produced by the analysis pipeline.

use chrono::NaiveDate;
use serde::Serialize;

use crate::analysis::sentiment::Sentiment;

/// A review that passed the month filter, labeled and scored.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredReview {
    pub date: NaiveDate,
    pub rating: i64,
    pub sentiment: Sentiment,
    /// Synthetic display value in `[0.80, 0.99)`, redrawn every recomputation.
    pub confidence: f64,
    pub text: String,
}

impl ScoredReview {
    /// Confidence formatted the way the detail table shows it, e.g. `"92.4%"`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

/// Count and mean confidence for one sentiment label.
#[derive(Debug, Default, Serialize)]
pub struct LabelAggregate {
    pub count: usize,
    pub avg_confidence: f64,
}

/// Per-month sentiment summary for the chart and JSON output.
#[derive(Debug, Serialize)]
pub struct SentimentBreakdown {
    pub month: String,
    pub year: i32,
    pub total: usize,
    pub positive: LabelAggregate,
    pub negative: LabelAggregate,
}

impl SentimentBreakdown {
    pub fn label(&self, sentiment: Sentiment) -> &LabelAggregate {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Negative => &self.negative,
        }
    }
}

//! Row scoring and per-label aggregation.

use rand::Rng;

use crate::analysis::confidence::draw_confidence;
use crate::analysis::filter::TARGET_YEAR;
use crate::analysis::sentiment::Sentiment;
use crate::analysis::types::{LabelAggregate, ScoredReview, SentimentBreakdown};
use crate::analysis::utility::mean;
use crate::dataset::Review;

/// Labels and scores a month-filtered set of reviews.
///
/// Classification is the rating threshold; confidence is a fresh random draw
/// per row. Rows whose date fails to parse are skipped, though the month
/// filter already excludes them.
pub fn score_reviews<R: Rng>(filtered: &[&Review], rng: &mut R) -> Vec<ScoredReview> {
    filtered
        .iter()
        .filter_map(|review| {
            let date = review.parsed_date()?;
            Some(ScoredReview {
                date,
                rating: review.rating,
                sentiment: Sentiment::from_rating(review.rating),
                confidence: draw_confidence(rng),
                text: review.text.clone(),
            })
        })
        .collect()
}

/// Groups scored rows by sentiment label into a [`SentimentBreakdown`].
pub fn aggregate(rows: &[ScoredReview], month: &str) -> SentimentBreakdown {
    SentimentBreakdown {
        month: month.to_string(),
        year: TARGET_YEAR,
        total: rows.len(),
        positive: label_aggregate(rows, Sentiment::Positive),
        negative: label_aggregate(rows, Sentiment::Negative),
    }
}

fn label_aggregate(rows: &[ScoredReview], label: Sentiment) -> LabelAggregate {
    let confidences: Vec<f64> = rows
        .iter()
        .filter(|r| r.sentiment == label)
        .map(|r| r.confidence)
        .collect();

    LabelAggregate {
        count: confidences.len(),
        avg_confidence: mean(&confidences),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::confidence::{CONFIDENCE_MAX, CONFIDENCE_MIN};
    use crate::analysis::filter::filter_by_month;

    fn review(date: &str, rating: i64, text: &str) -> Review {
        Review {
            date: date.to_string(),
            rating,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_may_scenario() {
        let reviews = vec![
            review("2023-05-02", 5, "great"),
            review("2023-05-03", 2, "bad"),
            review("2023-06-01", 4, "ok"),
        ];

        let filtered = filter_by_month(&reviews, 5);
        assert_eq!(filtered.len(), 2);

        let scored = score_reviews(&filtered, &mut rand::thread_rng());
        let breakdown = aggregate(&scored, "May");

        assert_eq!(breakdown.total, 2);
        assert_eq!(breakdown.positive.count, 1);
        assert_eq!(breakdown.negative.count, 1);
        assert_eq!(breakdown.year, 2023);
    }

    #[test]
    fn test_mean_confidence_within_bounds() {
        let reviews: Vec<Review> = (1..=20)
            .map(|d| review(&format!("2023-05-{d:02}"), if d % 2 == 0 { 5 } else { 1 }, "x"))
            .collect();

        let filtered = filter_by_month(&reviews, 5);
        let scored = score_reviews(&filtered, &mut rand::thread_rng());
        let breakdown = aggregate(&scored, "May");

        for agg in [&breakdown.positive, &breakdown.negative] {
            assert!(agg.avg_confidence >= CONFIDENCE_MIN);
            assert!(agg.avg_confidence < CONFIDENCE_MAX);
        }
    }

    #[test]
    fn test_empty_month_aggregates_to_zero() {
        let breakdown = aggregate(&[], "December");
        assert_eq!(breakdown.total, 0);
        assert_eq!(breakdown.positive.count, 0);
        assert_eq!(breakdown.negative.count, 0);
        assert_eq!(breakdown.positive.avg_confidence, 0.0);
    }

    #[test]
    fn test_confidence_redrawn_each_pass() {
        let reviews = vec![review("2023-05-02", 5, "great")];
        let filtered = filter_by_month(&reviews, 5);

        let mut rng = rand::thread_rng();
        let first = score_reviews(&filtered, &mut rng);
        let varied = (0..100).any(|_| {
            let again = score_reviews(&filtered, &mut rng);
            again[0].confidence != first[0].confidence
        });
        assert!(varied);
    }
}

use shoplens::analysis::aggregate::{aggregate, score_reviews};
use shoplens::analysis::confidence::{CONFIDENCE_MAX, CONFIDENCE_MIN};
use shoplens::analysis::filter::{filter_by_month, month_ordinal};
use shoplens::loader::load_dataset;
use shoplens::render::reviews::render_reviews;

fn fixture_path() -> String {
    format!(
        "{}/tests/fixtures/sample_data.json",
        env!("CARGO_MANIFEST_DIR")
    )
}

#[test]
fn test_full_pipeline_for_may() {
    let dataset = load_dataset(&fixture_path())
        .expect("fixture should load")
        .expect("fixture file exists");

    assert_eq!(dataset.products.len(), 3);
    assert_eq!(dataset.testimonials.len(), 3);
    assert_eq!(dataset.reviews.len(), 6);

    let ordinal = month_ordinal("May").unwrap();
    let filtered = filter_by_month(&dataset.reviews, ordinal);

    // June row, undated row, and the 2022 row are all excluded.
    assert_eq!(filtered.len(), 3);

    let scored = score_reviews(&filtered, &mut rand::thread_rng());
    let breakdown = aggregate(&scored, "May");

    assert_eq!(breakdown.total, 3);
    assert_eq!(breakdown.positive.count, 2);
    assert_eq!(breakdown.negative.count, 1);

    for agg in [&breakdown.positive, &breakdown.negative] {
        assert!(agg.avg_confidence >= CONFIDENCE_MIN);
        assert!(agg.avg_confidence < CONFIDENCE_MAX);
    }
}

#[test]
fn test_rendered_view_for_empty_month() {
    let dataset = load_dataset(&fixture_path()).unwrap().unwrap();

    let out = render_reviews(&dataset.reviews, "December", false).unwrap();
    assert!(out.contains("No reviews were recorded in December 2023."));
    assert!(!out.contains("avg confidence"));
}

#[test]
fn test_missing_file_halts_without_view() {
    let absent = load_dataset("/no/such/dir/scraped_data.json").unwrap();
    assert!(absent.is_none());
}

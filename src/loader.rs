//! Dataset loading and load-boundary validation.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::dataset::Dataset;

/// Raw top-level document shape. Collections are kept as loose JSON values so
/// that a single malformed row can be dropped instead of failing the load.
#[derive(Debug, Default, Deserialize)]
struct RawDataset {
    #[serde(default)]
    products: Vec<serde_json::Value>,
    #[serde(default)]
    testimonials: Vec<serde_json::Value>,
    #[serde(default)]
    reviews: Vec<serde_json::Value>,
}

/// Loads the scraped dataset from a JSON file at `path`.
///
/// An absent file is not an error: it returns `Ok(None)` and the caller must
/// halt rendering with an explanatory message. Malformed JSON or a document
/// that is not an object is an error. Individual rows that violate the record
/// schema are dropped with a warning.
pub fn load_dataset(path: &str) -> Result<Option<Dataset>> {
    if !Path::new(path).exists() {
        debug!(path, "Dataset file not found");
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file {path}"))?;
    let raw: RawDataset = serde_json::from_str(&content)
        .with_context(|| format!("dataset file {path} is not valid JSON"))?;

    let dataset = Dataset {
        products: collect_rows(raw.products, "products"),
        testimonials: collect_rows(raw.testimonials, "testimonials"),
        reviews: collect_rows(raw.reviews, "reviews"),
    };

    debug!(
        products = dataset.products.len(),
        testimonials = dataset.testimonials.len(),
        reviews = dataset.reviews.len(),
        "Dataset loaded"
    );

    Ok(Some(dataset))
}

/// Converts each raw row into `T`, dropping rows that fail validation.
fn collect_rows<T: serde::de::DeserializeOwned>(
    values: Vec<serde_json::Value>,
    collection: &str,
) -> Vec<T> {
    let mut rows = Vec::with_capacity(values.len());
    for (idx, value) in values.into_iter().enumerate() {
        match serde_json::from_value(value) {
            Ok(row) => rows.push(row),
            Err(e) => {
                warn!(collection, row = idx, error = %e, "Dropping row with invalid schema");
            }
        }
    }
    rows
}

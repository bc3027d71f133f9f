//! Record schemas for the scraped dataset.
//!
//! The dataset is loaded once at startup, treated as immutable, and passed
//! by reference into each view. Derived values (parsed prices, parsed dates)
//! are computed on demand and never mutate the records.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// A catalog item scraped from the shop listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub title: String,
    /// Raw price string as scraped, e.g. `"£51.77"` or `"51.77 EUR"`.
    pub price: String,
}

impl Product {
    /// Extracts the first embedded decimal amount from the raw price string.
    ///
    /// Only `digits.digits` shapes count; an integer-only price yields `None`
    /// and the row is excluded from the average rather than failing the view.
    pub fn price_value(&self) -> Option<f64> {
        extract_decimal(&self.price)
    }
}

/// A customer testimonial with a star rating and free-form text.
#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    #[serde(deserialize_with = "lenient_int")]
    pub rating: i64,
    #[serde(default)]
    pub text: String,
}

impl Testimonial {
    /// Renders the rating as star glyphs, clamped to 1..=5.
    pub fn stars(&self) -> String {
        let n = self.rating.clamp(1, 5) as usize;
        "⭐".repeat(n)
    }
}

/// A dated product review.
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    /// Raw date string as scraped; parse failures drop the row from analysis.
    pub date: String,
    #[serde(deserialize_with = "lenient_int")]
    pub rating: i64,
    #[serde(default)]
    pub text: String,
}

/// Accepted date shapes, tried in order. ISO first since that is what the
/// scraper emits; the rest cover hand-entered rows seen in older dumps.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%Y"];

impl Review {
    /// Parses the raw date string, trying each known format in order.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    }
}

/// The complete scraped record set: three named collections, loaded once per
/// process and read-only thereafter. Missing keys default to empty lists.
#[derive(Debug, Default)]
pub struct Dataset {
    pub products: Vec<Product>,
    pub testimonials: Vec<Testimonial>,
    pub reviews: Vec<Review>,
}

/// Accepts a JSON integer, float, or numeric string for rating fields.
///
/// The scraper is inconsistent about quoting numbers; anything that cannot be
/// coerced fails deserialization for that row, and the loader drops the row
/// with a warning instead of aborting the whole load.
fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct IntVisitor;

    impl serde::de::Visitor<'_> for IntVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("an integer or a numeric string")
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(v as i64)
        }

        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<i64, E> {
            Ok(v as i64)
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim().parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(IntVisitor)
}

/// Finds the first `digits.digits` run in `raw` and parses it as a float.
fn extract_decimal(raw: &str) -> Option<f64> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            return raw[start..i].parse().ok();
        }
    }
    None
}

//! Threshold sentiment classification.
//!
//! This is a deterministic cutoff on the scraped star rating, not a learned
//! model: anything above 3 stars reads as positive, everything else as
//! negative. There is no neutral class.

use serde::Serialize;

/// Binary sentiment label derived from a review's rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// | Rating | Label    |
    /// |--------|----------|
    /// | > 3    | Positive |
    /// | <= 3   | Negative |
    pub fn from_rating(rating: i64) -> Self {
        if rating > 3 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

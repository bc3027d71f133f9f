//! Review analysis pipeline.
//!
//! This module filters reviews to a selected month, classifies sentiment from
//! the numeric rating, attaches a synthetic confidence score, and aggregates
//! per-label counts for the chart and keyword views.

pub mod aggregate;
pub mod confidence;
pub mod filter;
pub mod keywords;
pub mod sentiment;
pub mod types;
pub mod utility;

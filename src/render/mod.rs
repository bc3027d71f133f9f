//! Terminal view rendering.
//!
//! Each view builds a plain `String` so rendering stays testable; the CLI
//! prints the result. Empty collections degrade to an in-place message,
//! never a failure.

pub mod products;
pub mod reviews;
pub mod testimonials;

/// Maximum bar length in characters for the categorical charts.
pub(crate) const BAR_WIDTH: usize = 40;

/// Renders a horizontal bar scaled against the largest count in the chart.
/// A non-zero count always gets at least one block.
pub(crate) fn bar(count: usize, max: usize, width: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let len = (count * width).div_ceil(max).clamp(1, width);
    "█".repeat(len)
}

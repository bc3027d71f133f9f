//! Customer testimonials view.

use std::fmt::Write;

use crate::analysis::utility::mean;
use crate::dataset::Testimonial;

/// Renders the testimonial listing: average rating, count, and a stars/text
/// table. An empty collection renders an info line instead.
pub fn render_testimonials(testimonials: &[Testimonial]) -> String {
    let mut out = String::new();

    writeln!(out, "== Testimonials ==").unwrap();

    if testimonials.is_empty() {
        writeln!(out, "No testimonial data available.").unwrap();
        return out;
    }

    let ratings: Vec<f64> = testimonials.iter().map(|t| t.rating as f64).collect();
    writeln!(out, "Average rating: {:.1} ⭐", mean(&ratings)).unwrap();
    writeln!(out, "Showing {} customer testimonials.", testimonials.len()).unwrap();
    writeln!(out).unwrap();

    for testimonial in testimonials {
        writeln!(out, "{:<6} {}", testimonial.stars(), testimonial.text).unwrap();
    }

    out
}

//! Synthetic per-row confidence scores.
//!
//! The score is a uniform random draw, not model certainty; it exists only to
//! populate the confidence column and its mean-aggregate tooltip. It is drawn
//! fresh on every recomputation, so repeated renders of the same month show
//! different values on purpose.

use rand::Rng;

/// Inclusive lower bound of the confidence display range.
pub const CONFIDENCE_MIN: f64 = 0.80;
/// Exclusive upper bound of the confidence display range.
pub const CONFIDENCE_MAX: f64 = 0.99;

/// Draws one confidence value uniformly from `[CONFIDENCE_MIN, CONFIDENCE_MAX)`.
pub fn draw_confidence<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(CONFIDENCE_MIN..CONFIDENCE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_stay_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let c = draw_confidence(&mut rng);
            assert!((CONFIDENCE_MIN..CONFIDENCE_MAX).contains(&c));
        }
    }

    #[test]
    fn test_draws_are_not_constant() {
        let mut rng = rand::thread_rng();
        let first = draw_confidence(&mut rng);
        let varied = (0..100).any(|_| draw_confidence(&mut rng) != first);
        assert!(varied);
    }
}

//! Word-level scoring of a submission against its reference text.
//!
//! The default `PositionalScorer` compares words at the same index only. A single inserted or
//! dropped word shifts every later word out of alignment and counts each of them as wrong.
//! Callers that need alignment-tolerant scoring supply their own `Scorer`.

use crate::server::model::attempt::Score;

/// Computes a `Score` for a submission.
///
/// Implementations must be pure: identical inputs always produce identical scores.
pub trait Scorer: Send + Sync {
    fn score(&self, reference: &str, submitted: &str) -> Score;
}

/// Strict position-by-position comparison with case-sensitive equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl Scorer for PositionalScorer {
    /// Splits both texts on whitespace and compares word `i` with word `i`.
    ///
    /// Error buckets:
    /// - aligned words that differ only by letter case count as case errors
    /// - other aligned mismatches count as spelling errors
    /// - reference words past the end of the submission count as spelling errors
    ///
    /// Grammatical errors are not detected and stay at zero. Extra submitted words past the
    /// end of the reference are ignored.
    fn score(&self, reference: &str, submitted: &str) -> Score {
        let reference: Vec<&str> = reference.split_whitespace().collect();
        let submitted: Vec<&str> = submitted.split_whitespace().collect();

        let mut correct_words = 0;
        let mut spelling_errors = 0;
        let mut case_errors = 0;

        for (expected, actual) in reference.iter().zip(submitted.iter()) {
            if expected == actual {
                correct_words += 1;
            } else if expected.to_lowercase() == actual.to_lowercase() {
                case_errors += 1;
            } else {
                spelling_errors += 1;
            }
        }

        let total_words = reference.len() as i32;
        // Reference words the submission never reached.
        spelling_errors += reference.len().saturating_sub(submitted.len()) as i32;

        let accuracy = if total_words > 0 {
            correct_words as f64 / total_words as f64 * 100.0
        } else {
            0.0
        };

        Score {
            total_words,
            correct_words,
            accuracy,
            grammatical_errors: 0,
            spelling_errors,
            case_errors,
        }
    }
}

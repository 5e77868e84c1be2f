//! Column delimiter detection over a sample of lines.

use crate::line::split_line;

/// Delimiters considered during detection, in tie-break order.
pub const DELIMITER_CANDIDATES: [char; 3] = [',', ';', '\t'];

/// How many leading non-empty lines [`detect_delimiter`] should be given.
pub const DETECTION_SAMPLE_LINES: usize = 10;

/// Picks the most plausible field delimiter for the sampled lines.
///
/// Every candidate splits each line quote-aware and is scored by
/// `multi_field_lines * 1 / (1 + variance)` over the per-line field
/// counts: a delimiter that consistently cuts every line into the same
/// number of columns beats one that only appears in loose text. A
/// candidate that never produces more than one field is discarded. The
/// highest score wins; ties (and a sample no candidate can split, such as
/// a single-column file) fall back to the comma.
pub fn detect_delimiter(sample: &[&str]) -> char {
    let mut best = DELIMITER_CANDIDATES[0];
    let mut best_score = 0.0f64;

    for candidate in DELIMITER_CANDIDATES {
        let counts: Vec<usize> = sample
            .iter()
            .map(|line| split_line(line, candidate).len())
            .collect();
        let multi_field = counts.iter().filter(|&&count| count > 1).count();
        if multi_field == 0 {
            continue;
        }

        let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        let variance = counts
            .iter()
            .map(|&count| {
                let delta = count as f64 - mean;
                delta * delta
            })
            .sum::<f64>()
            / counts.len() as f64;

        let score = multi_field as f64 / (1.0 + variance);
        if score > best_score {
            best_score = score;
            best = candidate;
        }
    }

    best
}

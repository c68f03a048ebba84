use crate::types::neighborhood::NeighborhoodRecord;
use crate::types::preferences::PreferenceVector;

/// Importance-weighted mean of a neighborhood's dimension scores, unrounded.
pub fn weighted_mean(record: &NeighborhoodRecord, preferences: &PreferenceVector) -> f64 {
    let (numerator, denominator) = weighted_terms(record, preferences);
    f64::from(numerator) / f64::from(denominator)
}

/// Weighted mean rounded to the nearest integer, halves rounding up.
///
/// The score is kept on the same 1..=10 scale as the dimension scores and is
/// shown as `n/10`. It is not multiplied by ten before rounding, so the match
/// level cut-offs at 8, 7 and 6 apply to it directly.
///
/// Every score and weight lies in 1..=10, so the result does too. The
/// denominator is at least 10 because `Weight` cannot be zero.
pub fn match_score(record: &NeighborhoodRecord, preferences: &PreferenceVector) -> u8 {
    let (numerator, denominator) = weighted_terms(record, preferences);
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    // Bounded by the largest dimension score, which is at most 10.
    rounded as u8
}

fn weighted_terms(record: &NeighborhoodRecord, preferences: &PreferenceVector) -> (u32, u32) {
    let numerator: u32 = preferences
        .iter()
        .map(|(dimension, weight)| u32::from(record.scores[dimension]) * u32::from(weight.get()))
        .sum();
    (numerator, preferences.total_weight())
}

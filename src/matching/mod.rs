pub mod categories;
pub mod ranking;
pub mod scoring;

use crate::catalog::catalog;
use crate::types::preferences::PreferenceVector;
use ranking::RankedMatch;

/// Ranks the built-in catalog for a submitted survey.
pub fn rank_catalog(preferences: &PreferenceVector) -> Vec<RankedMatch<'static>> {
    ranking::rank(catalog(), preferences)
}

use super::categories::top_categories;
use super::scoring::{match_score, weighted_mean};
use crate::types::dimension::Dimension;
use crate::types::neighborhood::NeighborhoodRecord;
use crate::types::preferences::PreferenceVector;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    Excellent,
    Great,
    Good,
    Fair,
}

impl MatchLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 8 {
            MatchLevel::Excellent
        } else if score >= 7 {
            MatchLevel::Great
        } else if score >= 6 {
            MatchLevel::Good
        } else {
            MatchLevel::Fair
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchLevel::Excellent => "Excellent Match",
            MatchLevel::Great => "Great Match",
            MatchLevel::Good => "Good Match",
            MatchLevel::Fair => "Fair Match",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch<'a> {
    pub neighborhood: &'a NeighborhoodRecord,
    pub match_score: u8,
    pub weighted_mean: f64,
    pub match_level: MatchLevel,
    pub top_categories: Vec<Dimension>,
    pub best_match: bool,
}

/// Scores every record and orders them best first.
///
/// Records with equal scores keep their catalog order. The first entry is
/// flagged as the best match.
pub fn rank<'a>(
    records: &'a [NeighborhoodRecord],
    preferences: &PreferenceVector,
) -> Vec<RankedMatch<'a>> {
    let mut matches: Vec<RankedMatch<'a>> = records
        .iter()
        .map(|record| {
            let score = match_score(record, preferences);
            RankedMatch {
                neighborhood: record,
                match_score: score,
                weighted_mean: weighted_mean(record, preferences),
                match_level: MatchLevel::from_score(score),
                top_categories: top_categories(record, preferences),
                best_match: false,
            }
        })
        .collect();

    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    if let Some(first) = matches.first_mut() {
        first.best_match = true;
    }

    tracing::debug!(
        preferences = %preferences,
        best = matches.first().map(|m| m.neighborhood.name).unwrap_or("none"),
        "ranked neighborhoods"
    );
    matches
}

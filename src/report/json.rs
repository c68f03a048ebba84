use crate::matching::ranking::RankedMatch;
use crate::research::{self, ResearchTab};
use crate::types::neighborhood::NeighborhoodRecord;
use crate::types::preferences::PreferenceVector;
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Map, Value};

#[derive(Debug, Serialize)]
struct MatchesReport<'r, 'a> {
    version: &'static str,
    generated_at: String,
    preferences: &'r PreferenceVector,
    matches: &'r [RankedMatch<'a>],
}

pub fn matches_to_json(
    preferences: &PreferenceVector,
    matches: &[RankedMatch<'_>],
) -> Result<String, serde_json::Error> {
    let report = MatchesReport {
        version: env!("CARGO_PKG_VERSION"),
        generated_at: Utc::now().to_rfc3339(),
        preferences,
        matches,
    };
    serde_json::to_string_pretty(&report)
}

pub fn research_to_json(tabs: &[ResearchTab]) -> Result<String, serde_json::Error> {
    let mut sections = Map::new();
    for tab in tabs {
        let section = match tab {
            ResearchTab::Methodology => serde_json::to_value(&research::METHODOLOGY)?,
            ResearchTab::Challenges => serde_json::to_value(&research::CHALLENGES)?,
            ResearchTab::Validation => serde_json::to_value(&research::VALIDATION)?,
            ResearchTab::Insights => serde_json::to_value(&research::INSIGHTS)?,
        };
        sections.insert(tab.key().to_string(), section);
    }

    let document = json!({
        "title": research::TITLE,
        "subtitle": research::SUBTITLE,
        "sections": Value::Object(sections),
    });
    serde_json::to_string_pretty(&document)
}

pub fn catalog_to_json(records: &[NeighborhoodRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::matching::ranking::rank;

    #[test]
    fn matches_json_carries_preferences_and_ranking() {
        let preferences = PreferenceVector::default();
        let rendered = matches_to_json(&preferences, &rank(catalog(), &preferences))
            .expect("json should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("output should be json");

        assert_eq!(value["preferences"]["familyFriendly"], 5);
        assert!(value["generated_at"].is_string());
        let matches = value["matches"].as_array().expect("matches should be an array");
        assert_eq!(matches.len(), 5);
        assert_eq!(matches[0]["neighborhood"]["name"], "Downtown Arts District");
        assert_eq!(matches[0]["match_score"], 7);
        assert_eq!(matches[0]["match_level"], "great");
        assert_eq!(matches[0]["best_match"], true);
        assert_eq!(matches[0]["neighborhood"]["scores"]["walkability"], 10);
        assert_eq!(matches[4]["best_match"], false);
    }

    #[test]
    fn research_json_keys_sections_by_tab() {
        let rendered = research_to_json(&[ResearchTab::Validation, ResearchTab::Insights])
            .expect("json should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("output should be json");

        assert_eq!(value["sections"]["validation"][0]["status"], "passed");
        assert_eq!(value["sections"]["insights"].as_array().map(Vec::len), Some(4));
        assert!(value["sections"].get("methodology").is_none());
    }

    #[test]
    fn catalog_json_lists_records_in_order() {
        let rendered = catalog_to_json(catalog()).expect("json should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("output should be json");
        assert_eq!(value[1]["name"], "Maple Grove Suburbs");
        assert_eq!(value[1]["key_features"][3], "Safe streets");
    }
}

use crate::matching::ranking::RankedMatch;
use crate::research::{self, ResearchTab};
use crate::types::neighborhood::NeighborhoodRecord;
use crate::types::preferences::PreferenceVector;

pub fn matches_to_markdown(preferences: &PreferenceVector, matches: &[RankedMatch<'_>]) -> String {
    let mut output = String::new();
    output.push_str("# Your Neighborhood Matches\n\n");
    output.push_str(
        "Based on your lifestyle preferences, here are your best neighborhood matches.\n\n",
    );

    for ranked in matches {
        let neighborhood = ranked.neighborhood;
        output.push_str(&format!("## {}", neighborhood.name));
        if ranked.best_match {
            output.push_str(" (Best Match)");
        }
        output.push_str("\n\n");
        output.push_str(&format!(
            "{} | {}/10 | {}\n\n",
            neighborhood.city,
            ranked.match_score,
            ranked.match_level.label()
        ));
        output.push_str(&format!("{}\n\n", neighborhood.description));

        output.push_str("Top matching categories: ");
        if ranked.top_categories.is_empty() {
            output.push_str("none");
        } else {
            let labels: Vec<_> = ranked
                .top_categories
                .iter()
                .map(|dimension| dimension.label())
                .collect();
            output.push_str(&labels.join(", "));
        }
        output.push_str("\n\n");

        output.push_str(&format!(
            "Key features: {}\n\n",
            neighborhood.key_features.join(", ")
        ));

        output.push_str("### Detailed Scores\n\n");
        for (dimension, score) in neighborhood.scores.iter() {
            output.push_str(&format!("- {}: {}/10", dimension.label(), score));
            if preferences.weight(dimension).is_high_priority() {
                output.push_str(" (High Priority)");
            }
            output.push('\n');
        }
        output.push('\n');
    }

    output
}

pub fn research_to_markdown(tabs: &[ResearchTab]) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n{}\n\n", research::TITLE, research::SUBTITLE));

    for tab in tabs {
        output.push_str(&format!("## {}\n\n", tab.heading()));
        match tab {
            ResearchTab::Methodology => {
                for phase in &research::METHODOLOGY {
                    output.push_str(&format!(
                        "### {} [{}]\n\n{}\n\nMethods used: {}\n\nKey findings: {}\n\n",
                        phase.phase,
                        phase.status.label(),
                        phase.description,
                        phase.methods.join(", "),
                        phase.findings
                    ));
                }
            }
            ResearchTab::Challenges => {
                for item in &research::CHALLENGES {
                    output.push_str(&format!(
                        "### {} [{:?} Impact, {}]\n\nSolution: {}\n\n",
                        item.challenge,
                        item.impact,
                        item.status.label(),
                        item.solution
                    ));
                }
            }
            ResearchTab::Validation => {
                for test in &research::VALIDATION {
                    output.push_str(&format!(
                        "### {} [{}]\n\nMethod: {}\n\nResult: {}\n\n",
                        test.test,
                        test.status.label(),
                        test.method,
                        test.result
                    ));
                }
            }
            ResearchTab::Insights => {
                for group in &research::INSIGHTS {
                    output.push_str(&format!("### {}\n\n", group.title));
                    for item in group.items {
                        output.push_str(&format!("- {item}\n"));
                    }
                    output.push('\n');
                }
            }
        }
    }

    output
}

pub fn catalog_to_markdown(records: &[NeighborhoodRecord]) -> String {
    let mut output = String::new();
    output.push_str("# Neighborhood Catalog\n\n");
    for record in records {
        output.push_str(&format!(
            "## {} ({})\n\n{}\n\n",
            record.name, record.city, record.description
        ));
        let scores: Vec<_> = record
            .scores
            .iter()
            .map(|(dimension, score)| format!("{} {}", dimension.label(), score))
            .collect();
        output.push_str(&format!("Scores: {}\n\n", scores.join(", ")));
        output.push_str(&format!("Key features: {}\n\n", record.key_features.join(", ")));
    }
    output
}

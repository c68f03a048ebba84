pub mod json;
pub mod md;

use crate::error::{NeighborFitError, Result};
use crate::matching::ranking::RankedMatch;
use crate::research::ResearchTab;
use crate::types::neighborhood::NeighborhoodRecord;
use crate::types::preferences::PreferenceVector;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    Md,
}

impl FromStr for OutputFormat {
    type Err = NeighborFitError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "md" => Ok(OutputFormat::Md),
            other => Err(NeighborFitError::ConfigParse(format!(
                "unsupported report.format: {other}"
            ))),
        }
    }
}

pub fn render_matches(
    preferences: &PreferenceVector,
    matches: &[RankedMatch<'_>],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            json::matches_to_json(preferences, matches).map_err(NeighborFitError::Json)
        }
        OutputFormat::Md => Ok(md::matches_to_markdown(preferences, matches)),
    }
}

pub fn render_research(tabs: &[ResearchTab], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::research_to_json(tabs).map_err(NeighborFitError::Json),
        OutputFormat::Md => Ok(md::research_to_markdown(tabs)),
    }
}

pub fn render_catalog(records: &[NeighborhoodRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::catalog_to_json(records).map_err(NeighborFitError::Json),
        OutputFormat::Md => Ok(md::catalog_to_markdown(records)),
    }
}

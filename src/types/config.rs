use crate::error::NeighborFitError;
use crate::types::dimension::{Dimension, DimensionMap};
use crate::types::preferences::{PreferenceVector, Weight};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NeighborFitConfig {
    pub survey: Option<SurveyConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurveyConfig {
    /// Initial value per dimension key; missing keys start at the neutral weight.
    #[serde(default)]
    pub defaults: HashMap<String, i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "md".to_string()
}

impl NeighborFitConfig {
    /// Starting weights for a new survey form.
    pub fn survey_defaults(&self) -> Result<PreferenceVector, NeighborFitError> {
        let mut weights = DimensionMap::splat(Weight::NEUTRAL);
        if let Some(survey) = &self.survey {
            for (key, value) in &survey.defaults {
                let dimension: Dimension = key.parse().map_err(|_| {
                    NeighborFitError::ConfigParse(format!(
                        "survey.defaults contains unknown key: {key}"
                    ))
                })?;
                weights[dimension] = Weight::try_from(*value).map_err(|_| {
                    NeighborFitError::ConfigParse(format!(
                        "survey.defaults.{key} must be between {} and {} (found {value})",
                        Weight::MIN,
                        Weight::MAX
                    ))
                })?;
            }
        }
        Ok(PreferenceVector::new(weights))
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report.as_ref().map(|report| report.format.as_str())
    }

    pub fn validate(&self) -> Result<(), NeighborFitError> {
        self.survey_defaults()?;

        if let Some(format) = self.report_format() {
            if !matches!(format, "md" | "json") {
                return Err(NeighborFitError::ConfigParse(format!(
                    "unsupported report.format: {format}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let cfg: NeighborFitConfig = toml::from_str("").expect("empty config should parse");
        assert!(cfg.survey.is_none());
        assert!(cfg.report_format().is_none());
        assert_eq!(
            cfg.survey_defaults().expect("defaults should resolve"),
            PreferenceVector::default()
        );
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[survey.defaults]
safety = 9
familyFriendly = 8

[report]
format = "json"
"#;
        let cfg: NeighborFitConfig = toml::from_str(toml_str).expect("full config should parse");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.report_format(), Some("json"));

        let defaults = cfg.survey_defaults().expect("defaults should resolve");
        assert_eq!(defaults.weight(Dimension::Safety).get(), 9);
        assert_eq!(defaults.weight(Dimension::FamilyFriendly).get(), 8);
        assert_eq!(defaults.weight(Dimension::Commute), Weight::NEUTRAL);
    }

    #[test]
    fn report_format_defaults_to_markdown() {
        let cfg: NeighborFitConfig = toml::from_str("[report]\n").expect("config should parse");
        assert_eq!(cfg.report_format(), Some("md"));
    }

    #[test]
    fn validate_rejects_unknown_dimension_key() {
        let toml_str = r#"
[survey.defaults]
parking = 4
"#;
        let cfg: NeighborFitConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unknown key: parking"));
    }

    #[test]
    fn validate_rejects_out_of_range_default() {
        let toml_str = r#"
[survey.defaults]
safety = 0
"#;
        let cfg: NeighborFitConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("survey.defaults.safety must be between 1 and 10"));
    }

    #[test]
    fn validate_rejects_unknown_format() {
        let toml_str = r#"
[report]
format = "sarif"
"#;
        let cfg: NeighborFitConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported report.format"));
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeighborFitError {
    #[error("unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("weight must be between 1 and 10 (got {0})")]
    WeightOutOfRange(i64),

    #[error("invalid assignment '{0}': expected <dimension>=<1-10>")]
    InvalidAssignment(String),

    #[error("matches are unavailable until the survey has been submitted")]
    MatchesUnavailable,

    #[error("the survey is not open; run `survey` first")]
    SurveyClosed,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unknown research tab: {0}")]
    UnknownResearchTab(String),

    #[error("unknown neighborhood: {0}")]
    UnknownNeighborhood(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NeighborFitError {
    /// Errors caused by what the user typed or configured, as opposed to the environment.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(
            self,
            NeighborFitError::Io(_) | NeighborFitError::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, NeighborFitError>;

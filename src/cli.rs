use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "neighborfit",
    version,
    about = "Find your neighborhood match from a lifestyle preference survey"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding neighborfit.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer the survey interactively, then show matches
    Survey(SurveyCommand),
    /// Rank neighborhoods for the given weights
    Matches(MatchesCommand),
    /// Show the research methodology documentation
    Research(ResearchCommand),
    /// List the neighborhood catalog
    Catalog(CatalogCommand),
    /// Start an interactive session with survey, matches and research tabs
    Session,
}

#[derive(Args)]
pub struct SurveyCommand {
    /// Preset an answer, e.g. --set safety=9 (repeatable)
    #[arg(long = "set", value_name = "DIMENSION=WEIGHT")]
    pub assignments: Vec<String>,
    /// Skip the questions and submit the preset answers
    #[arg(long)]
    pub no_prompt: bool,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct MatchesCommand {
    /// Weight for one dimension, e.g. --set safety=9 (repeatable)
    #[arg(long = "set", value_name = "DIMENSION=WEIGHT")]
    pub assignments: Vec<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ResearchCommand {
    #[arg(long, value_enum, default_value = "all")]
    pub tab: ResearchTabArg,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct CatalogCommand {
    /// Show a single neighborhood by id
    #[arg(long)]
    pub id: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ResearchTabArg {
    All,
    Methodology,
    Challenges,
    Validation,
    Insights,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

mod catalog;
mod cli;
mod config;
mod error;
mod matching;
mod report;
mod research;
mod session;
mod survey;
mod types;

use crate::error::NeighborFitError;
use crate::report::OutputFormat;
use crate::research::ResearchTab;
use crate::survey::SurveyForm;
use crate::types::preferences::PreferenceVector;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_format(
    flag: Option<cli::ReportFormat>,
    configured: OutputFormat,
) -> OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None => configured,
    }
}

fn print_matches(preferences: &PreferenceVector, format: OutputFormat) -> Result<(), NeighborFitError> {
    let matches = matching::rank_catalog(preferences);
    let rendered = report::render_matches(preferences, &matches, format)?;
    println!("{rendered}");
    Ok(())
}

fn run() -> Result<i32, NeighborFitError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "neighborfit starting");

    let cfg = config::load_config(&cli.config_dir)?.unwrap_or_default();
    let configured_format = cfg
        .report_format()
        .map(str::parse::<OutputFormat>)
        .transpose()?
        .unwrap_or_default();

    match cli.command {
        cli::Commands::Survey(cmd) => {
            let mut form = SurveyForm::new(cfg.survey_defaults()?);
            for assignment in &cmd.assignments {
                form.apply_assignment(assignment)?;
            }
            if !cmd.no_prompt {
                let stdin = std::io::stdin();
                let mut input = stdin.lock();
                let mut prompts = std::io::stderr().lock();
                survey::prompt_survey(&mut input, &mut prompts, &mut form)?;
            }
            print_matches(
                &form.submit(),
                resolve_format(cmd.format, configured_format),
            )?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Matches(cmd) => {
            let mut form = SurveyForm::new(cfg.survey_defaults()?);
            for assignment in &cmd.assignments {
                form.apply_assignment(assignment)?;
            }
            print_matches(
                &form.submit(),
                resolve_format(cmd.format, configured_format),
            )?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Research(cmd) => {
            let tabs = match cmd.tab {
                cli::ResearchTabArg::All => ResearchTab::ALL.to_vec(),
                cli::ResearchTabArg::Methodology => vec![ResearchTab::Methodology],
                cli::ResearchTabArg::Challenges => vec![ResearchTab::Challenges],
                cli::ResearchTabArg::Validation => vec![ResearchTab::Validation],
                cli::ResearchTabArg::Insights => vec![ResearchTab::Insights],
            };
            let rendered =
                report::render_research(&tabs, resolve_format(cmd.format, configured_format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Catalog(cmd) => {
            let records = match &cmd.id {
                Some(id) => std::slice::from_ref(
                    catalog::find(id)
                        .ok_or_else(|| NeighborFitError::UnknownNeighborhood(id.clone()))?,
                ),
                None => catalog::catalog(),
            };
            let rendered =
                report::render_catalog(records, resolve_format(cmd.format, configured_format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Session => {
            let mut state = session::AppState::new(SurveyForm::new(cfg.survey_defaults()?));
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout().lock();
            session::run_session(&mut input, &mut output, &mut state)?;
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_invalid_input() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}

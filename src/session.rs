use crate::error::{NeighborFitError, Result};
use crate::matching::rank_catalog;
use crate::matching::ranking::RankedMatch;
use crate::report::{self, OutputFormat};
use crate::research::ResearchTab;
use crate::survey::SurveyForm;
use crate::types::dimension::Dimension;
use crate::types::preferences::PreferenceVector;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Survey,
    Matches,
    Research(ResearchTab),
}

/// State of one interactive session: the active tab, the survey draft, and
/// the last submitted preferences with their ranking.
#[derive(Debug)]
pub struct AppState {
    tab: Tab,
    draft: SurveyForm,
    submitted: Option<Submission>,
}

#[derive(Debug)]
struct Submission {
    preferences: PreferenceVector,
    matches: Vec<RankedMatch<'static>>,
}

impl AppState {
    pub fn new(draft: SurveyForm) -> Self {
        Self {
            tab: Tab::Survey,
            draft,
            submitted: None,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn preferences(&self) -> Option<&PreferenceVector> {
        self.submitted
            .as_ref()
            .map(|submission| &submission.preferences)
    }

    pub fn matches(&self) -> Option<&[RankedMatch<'static>]> {
        self.submitted
            .as_ref()
            .map(|submission| submission.matches.as_slice())
    }

    /// Changes one survey answer. Only allowed while the survey tab is open.
    pub fn set_weight(&mut self, dimension: Dimension, value: i64) -> Result<()> {
        if self.tab != Tab::Survey {
            return Err(NeighborFitError::SurveyClosed);
        }
        self.draft.set(dimension, value)
    }

    /// Submits the draft and moves to the matches tab. Only allowed while the
    /// survey tab is open.
    ///
    /// Resubmitting the same answers reuses the previous ranking.
    pub fn submit(&mut self) -> Result<&[RankedMatch<'static>]> {
        if self.tab != Tab::Survey {
            return Err(NeighborFitError::SurveyClosed);
        }
        let preferences = self.draft.submit();
        let submission = match self.submitted.take() {
            Some(previous) if previous.preferences == preferences => previous,
            _ => Submission {
                preferences,
                matches: rank_catalog(&preferences),
            },
        };
        tracing::debug!(from = ?self.tab, to = ?Tab::Matches, "survey submitted");
        self.tab = Tab::Matches;
        Ok(&self.submitted.insert(submission).matches)
    }

    pub fn select(&mut self, tab: Tab) -> Result<()> {
        if tab == Tab::Matches && self.submitted.is_none() {
            return Err(NeighborFitError::MatchesUnavailable);
        }
        tracing::debug!(from = ?self.tab, to = ?tab, "switching tab");
        self.tab = tab;
        Ok(())
    }

    /// Renders the active tab as Markdown.
    pub fn render(&self) -> Result<String> {
        match self.tab {
            Tab::Survey => Ok(render_survey(&self.draft)),
            Tab::Matches => match (self.preferences(), self.matches()) {
                (Some(preferences), Some(matches)) => {
                    report::render_matches(preferences, matches, OutputFormat::Md)
                }
                _ => Err(NeighborFitError::MatchesUnavailable),
            },
            Tab::Research(tab) => report::render_research(&[tab], OutputFormat::Md),
        }
    }
}

fn render_survey(form: &SurveyForm) -> String {
    let mut output = String::new();
    output.push_str("# Lifestyle Preferences Survey\n\n");
    output.push_str("Rate each factor from 1 (not important) to 10 (very important).\n\n");
    for dimension in Dimension::ALL {
        output.push_str(&format!(
            "- {} ({}): {}\n",
            dimension.question_title(),
            dimension.key(),
            form.get(dimension)
        ));
    }
    output.push_str("\nUse `set <dimension> <1-10>` to adjust and `submit` to see your matches.\n");
    output
}

const HELP: &str = "\
commands:
  survey                      open the survey
  set <dimension> <1-10>      change one answer (survey only)
  submit                      submit the survey and show matches
  matches                     show matches for the last submission
  research [tab]              methodology, challenges, validation, insights
  show                        render the current tab again
  help                        show this message
  quit                        leave the session
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Survey,
    Set(Dimension, i64),
    Submit,
    Matches,
    Research(ResearchTab),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((name, args)) = words.split_first() else {
        return Err(NeighborFitError::UnknownCommand(String::new()));
    };

    match (name.to_ascii_lowercase().as_str(), args) {
        ("survey", []) => Ok(Command::Survey),
        ("set", [dimension, value]) => parse_set(dimension, value, &args.join(" ")),
        ("set", [assignment]) => {
            let (dimension, value) = assignment
                .split_once('=')
                .ok_or_else(|| NeighborFitError::InvalidAssignment(assignment.to_string()))?;
            parse_set(dimension, value, assignment)
        }
        ("set", _) => Err(NeighborFitError::InvalidAssignment(args.join(" "))),
        ("submit", []) => Ok(Command::Submit),
        ("matches", []) => Ok(Command::Matches),
        ("research", []) => Ok(Command::Research(ResearchTab::default())),
        ("research", [tab]) => Ok(Command::Research(tab.parse()?)),
        ("show", []) => Ok(Command::Show),
        ("help" | "?", []) => Ok(Command::Help),
        ("quit" | "exit", []) => Ok(Command::Quit),
        _ => Err(NeighborFitError::UnknownCommand(line.trim().to_string())),
    }
}

fn parse_set(dimension: &str, value: &str, raw: &str) -> Result<Command> {
    let dimension = dimension.parse()?;
    let value = value
        .trim()
        .parse()
        .map_err(|_| NeighborFitError::InvalidAssignment(raw.to_string()))?;
    Ok(Command::Set(dimension, value))
}

enum Flow {
    Continue,
    Quit,
}

fn execute<W: Write>(command: Command, state: &mut AppState, output: &mut W) -> Result<Flow> {
    match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Help => {
            write!(output, "{}", HELP)?;
            return Ok(Flow::Continue);
        }
        Command::Set(dimension, value) => {
            state.set_weight(dimension, value)?;
            writeln!(output, "{} = {}", dimension.question_title(), value)?;
            return Ok(Flow::Continue);
        }
        Command::Survey => state.select(Tab::Survey)?,
        Command::Submit => {
            state.submit()?;
        }
        Command::Matches => state.select(Tab::Matches)?,
        Command::Research(tab) => state.select(Tab::Research(tab))?,
        Command::Show => {}
    }
    writeln!(output, "{}", state.render()?)?;
    Ok(Flow::Continue)
}

/// Runs a line-oriented session until `quit` or end of input.
///
/// Command errors are reported on `output` and the session continues; only
/// I/O failures end it early.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    state: &mut AppState,
) -> Result<()> {
    writeln!(output, "NeighborFit session. Type `help` for commands.\n")?;
    writeln!(output, "{}", state.render()?)?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let result = parse_command(&line).and_then(|command| execute(command, state, output));
        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(NeighborFitError::Io(err)) => return Err(NeighborFitError::Io(err)),
            Err(err) => {
                tracing::debug!(error = %err, "session command rejected");
                writeln!(output, "error: {err}")?;
            }
        }
    }

    tracing::debug!(
        tab = ?state.tab(),
        submitted = state.preferences().is_some(),
        "session ended"
    );
    Ok(())
}

use crate::error::{NeighborFitError, Result};
use crate::types::dimension::{Dimension, DimensionMap};
use crate::types::preferences::{PreferenceVector, Weight};
use std::io::{BufRead, Write};

/// Mutable draft of a survey. Every dimension always holds a valid weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyForm {
    weights: DimensionMap<Weight>,
}

impl SurveyForm {
    pub fn new(initial: PreferenceVector) -> Self {
        Self {
            weights: DimensionMap::from_fn(|dimension| initial.weight(dimension)),
        }
    }

    pub fn get(&self, dimension: Dimension) -> Weight {
        self.weights[dimension]
    }

    pub fn set(&mut self, dimension: Dimension, value: i64) -> Result<()> {
        self.weights[dimension] = Weight::try_from(value)?;
        Ok(())
    }

    /// Applies a `dimension=value` assignment such as `safety=9`.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| NeighborFitError::InvalidAssignment(assignment.to_string()))?;
        let dimension: Dimension = key.parse()?;
        let value: i64 = value
            .trim()
            .parse()
            .map_err(|_| NeighborFitError::InvalidAssignment(assignment.to_string()))?;
        self.set(dimension, value)
    }

    pub fn submit(&self) -> PreferenceVector {
        let preferences = PreferenceVector::new(self.weights);
        tracing::info!(preferences = %preferences, "survey completed");
        preferences
    }
}

impl Default for SurveyForm {
    fn default() -> Self {
        Self::new(PreferenceVector::default())
    }
}

/// Asks every survey question in order on `output`, reading answers from `input`.
///
/// An empty answer keeps the current value. Invalid answers re-ask the same
/// question. Reaching end of input keeps the remaining values as they are.
pub fn prompt_survey<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    form: &mut SurveyForm,
) -> Result<()> {
    writeln!(
        output,
        "Rate each factor from {} (not important) to {} (very important). Press Enter to keep the current value.",
        Weight::MIN,
        Weight::MAX
    )?;

    let mut line = String::new();
    for dimension in Dimension::ALL {
        loop {
            writeln!(output)?;
            writeln!(output, "{}", dimension.question_title())?;
            writeln!(output, "  {}", dimension.question_description())?;
            write!(output, "  [{}]: ", form.get(dimension))?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(());
            }

            let answer = line.trim();
            if answer.is_empty() {
                break;
            }
            match answer.parse::<i64>() {
                Ok(value) => match form.set(dimension, value) {
                    Ok(()) => break,
                    Err(err) => writeln!(output, "  {err}")?,
                },
                Err(_) => writeln!(
                    output,
                    "  please enter a whole number between {} and {}",
                    Weight::MIN,
                    Weight::MAX
                )?,
            }
        }
    }
    Ok(())
}

//! rendering of split and ranked header values

use rama_negotiate::{rank_values, rank_values_with_quality, split_values_with_parameters};
use std::fmt::Write as _;

use crate::BoxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputMode {
    /// ranked values, one per line
    Values,
    /// ranked values with their quality, one per line
    Weights,
    /// values and their parameters as json
    Params,
}

pub(crate) fn render(mode: OutputMode, lines: &[String]) -> Result<String, BoxError> {
    let values = split_values_with_parameters(lines);

    let mut output = String::new();
    match mode {
        OutputMode::Params => {
            output = serde_json::to_string_pretty(&values)?;
            output.push('\n');
        }
        OutputMode::Weights => {
            for (value, quality) in rank_values_with_quality(&values)? {
                writeln!(output, "{value};q={}", quality.as_f64())?;
            }
        }
        OutputMode::Values => {
            for value in rank_values(&values)? {
                writeln!(output, "{value}")?;
            }
        }
    }
    Ok(output)
}

//! Splitting of raw header lines into values and their parameters.
//!
//! Headers such as `Accept`, `Accept-Language` and `Accept-Encoding` share a
//! convention: a comma separated list of values, each optionally followed by
//! `;`-separated `name=value` parameters:
//!
//! ```text
//! text/html,application/xml;q=0.9,*/*;q=0.8
//! ```
//!
//! Repeated header occurrences and comma-joined values are equivalent in HTTP,
//! which is why all functions here take a sequence of header lines.
//!
//! Splitting is purely lexical and never fails: malformed or empty input
//! produces a best-effort structural result.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::OnceLock;

use tracing::trace;

/// Parameters of a single header value, mapping parameter name to raw value.
///
/// Iteration order is the order in which a name was first seen.
pub type Params = IndexMap<String, String>;

/// Header values mapped to their parameters,
/// as produced by [`split_values_with_parameters`].
pub type ValuesWithParams = IndexMap<String, Params>;

/// One or more lowercase ASCII letters, `=`, then anything up to the next `;`.
const PARAMETER_PATTERN: &str = r"([a-z]+)=([^;]+)";

#[expect(clippy::expect_used, reason = "PARAMETER_PATTERN is a constant")]
fn parameter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(PARAMETER_PATTERN).expect("valid parameter pattern"))
}

fn is_line_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// Split header lines on `,` into a flat list of value tokens.
///
/// Each line is trimmed once before splitting, the resulting pieces are
/// kept as-is. A line that trims to nothing still yields one empty piece.
///
/// ```
/// use rama_negotiate::split::split_values;
///
/// let values = split_values(["text/html,application/xml;q=0.9", " image/webp "]);
/// assert_eq!(values, ["text/html", "application/xml;q=0.9", "image/webp"]);
/// ```
pub fn split_values<I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item: AsRef<str>>,
{
    let mut values = Vec::new();
    for line in lines {
        let line = line.as_ref().trim_matches(is_line_whitespace);
        values.extend(line.split(',').map(str::to_owned));
    }
    trace!(values = values.len(), "split header lines into values");
    values
}

/// Extract the `name=value` parameters found in a value token.
///
/// Only lowercase ASCII names are recognised, a parameter value runs up to
/// the next `;`. When a name occurs more than once the last value wins.
/// The token may (and usually does) still contain the leading value,
/// which never matches the parameter pattern unless it contains a `=` itself.
///
/// ```
/// use rama_negotiate::split::parse_parameters;
///
/// let params = parse_parameters("application/signed-exchange;v=b3;q=0.7");
/// assert_eq!(params.get("v").map(String::as_str), Some("b3"));
/// assert_eq!(params.get("q").map(String::as_str), Some("0.7"));
/// ```
#[must_use]
pub fn parse_parameters(token: &str) -> Params {
    parameter_pattern()
        .captures_iter(token)
        .map(|captures| {
            let (_, [name, value]) = captures.extract();
            (name.to_owned(), value.to_owned())
        })
        .collect()
}

/// Split header lines into values, each mapped to its parameters.
///
/// The value is everything before the first `;` of a token. Parameters are
/// extracted from the full token using [`parse_parameters`]. When the same
/// value occurs more than once, its parameters are replaced by those of the
/// last occurrence while it keeps the position where it was first seen.
///
/// ```
/// use rama_negotiate::split::split_values_with_parameters;
///
/// let values = split_values_with_parameters(["text/html,*/*;q=0.8"]);
/// assert!(values["text/html"].is_empty());
/// assert_eq!(values["*/*"]["q"], "0.8");
/// ```
pub fn split_values_with_parameters<I>(lines: I) -> ValuesWithParams
where
    I: IntoIterator<Item: AsRef<str>>,
{
    let mut result = ValuesWithParams::new();
    for token in split_values(lines) {
        let (value, params) = match token.find(';') {
            Some(idx) => {
                let params = parse_parameters(&token);
                let mut value = token;
                value.truncate(idx);
                (value, params)
            }
            None => (token, Params::new()),
        };
        result.insert(value, params);
    }
    result
}

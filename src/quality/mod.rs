//! Ranking of header values by their quality (`q`) parameter.
//!
//! Content negotiation headers attach a relative weight to each value using
//! the `q` parameter, see
//! [RFC9110](https://datatracker.ietf.org/doc/html/rfc9110#section-12.4.2):
//!
//! ```text
//! Accept-Language: da, en-gb;q=0.8, en;q=0.7
//! ```
//!
//! The functions in this module work on the output shape of
//! [`split_values_with_parameters`], which is all they depend on.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::Error;
use crate::split::{ValuesWithParams, split_values_with_parameters};

mod value;
#[doc(inline)]
pub use value::Quality;

/// Header values mapped to their resolved [`Quality`].
pub type QualityWeights = IndexMap<String, Quality>;

/// Resolve the [`Quality`] of each value from its `q` (or `Q`) parameter.
///
/// A value without either parameter has [`Quality::ONE`]. The first value
/// (in iteration order) with a non-numeric or out of range quality
/// aborts the resolution with an [`Error`].
///
/// ```
/// use rama_negotiate::{quality::resolve_quality_weights, split::split_values_with_parameters};
///
/// let values = split_values_with_parameters(["gzip;q=0.5, br"]);
/// let weights = resolve_quality_weights(&values).unwrap();
/// assert_eq!(weights["gzip"].as_f64(), 0.5);
/// assert_eq!(weights[" br"].as_f64(), 1.0);
/// ```
pub fn resolve_quality_weights(values: &ValuesWithParams) -> Result<QualityWeights, Error> {
    values
        .iter()
        .map(|(value, params)| {
            let quality = match params.get("q").or_else(|| params.get("Q")) {
                Some(raw) => raw.parse::<Quality>().map_err(|err| {
                    debug!(%value, raw_quality = %raw, "rejected quality parameter");
                    err.with_value(value.as_str())
                })?,
                None => Quality::ONE,
            };
            Ok((value.clone(), quality))
        })
        .collect()
}

/// Rank values by descending [`Quality`], keeping the resolved weights.
///
/// Values of equal quality keep the relative order they have in `values`.
pub fn rank_values_with_quality(
    values: &ValuesWithParams,
) -> Result<Vec<(String, Quality)>, Error> {
    let mut ranked: Vec<_> = resolve_quality_weights(values)?.into_iter().collect();
    // stable sort: ties keep their input order
    ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
    trace!(values = ranked.len(), "ranked values by quality");
    Ok(ranked)
}

/// Rank values by descending [`Quality`].
///
/// Values of equal quality keep the relative order they have in `values`,
/// such that values without a `q` parameter stay in header order.
///
/// ```
/// use rama_negotiate::{quality::rank_values, split::split_values_with_parameters};
///
/// let values = split_values_with_parameters(["text/html;q=0.8,application/json,image/png;q=0.4"]);
/// assert_eq!(
///     rank_values(&values).unwrap(),
///     ["application/json", "text/html", "image/png"],
/// );
/// ```
pub fn rank_values(values: &ValuesWithParams) -> Result<Vec<String>, Error> {
    Ok(rank_values_with_quality(values)?
        .into_iter()
        .map(|(value, _)| value)
        .collect())
}

/// Split raw header lines and rank the resulting values by descending [`Quality`].
///
/// Shorthand for [`split_values_with_parameters`] followed by [`rank_values`].
pub fn rank_header_lines<I>(lines: I) -> Result<Vec<String>, Error>
where
    I: IntoIterator<Item: AsRef<str>>,
{
    rank_values(&split_values_with_parameters(lines))
}

//! Splitting and ranking of header values straight from a [`HeaderMap`].

use ::http::{HeaderMap, header::AsHeaderName};
use tracing::debug;

use crate::Error;
use crate::quality::rank_values;
use crate::split::{ValuesWithParams, split_values, split_values_with_parameters};

fn utf8_header_values<K>(headers: &HeaderMap, name: K) -> impl Iterator<Item = &str>
where
    K: AsHeaderName,
{
    headers
        .get_all(name)
        .into_iter()
        .filter_map(|value| match std::str::from_utf8(value.as_bytes()) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!("skip non-utf-8 header value: {err}");
                None
            }
        })
}

/// Split all occurrences of the header `name` into a flat list of value tokens.
///
/// Values that are not valid UTF-8 are skipped, non-ASCII UTF-8 is kept.
/// See [`split_values`] for the splitting rules.
pub fn split_header_values<K>(headers: &HeaderMap, name: K) -> Vec<String>
where
    K: AsHeaderName,
{
    split_values(utf8_header_values(headers, name))
}

/// Split all occurrences of the header `name` into values mapped to their parameters.
///
/// See [`split_values_with_parameters`] for the splitting rules.
pub fn header_values_with_parameters<K>(headers: &HeaderMap, name: K) -> ValuesWithParams
where
    K: AsHeaderName,
{
    split_values_with_parameters(utf8_header_values(headers, name))
}

/// Rank the values of all occurrences of the header `name` by descending quality.
///
/// ```
/// use http::{HeaderMap, HeaderValue, header::ACCEPT_LANGUAGE};
/// use rama_negotiate::rank_header_values;
///
/// let mut headers = HeaderMap::new();
/// headers.append(ACCEPT_LANGUAGE, HeaderValue::from_static("en;q=0.7,nl"));
/// headers.append(ACCEPT_LANGUAGE, HeaderValue::from_static("fr;q=0.8"));
///
/// assert_eq!(
///     rank_header_values(&headers, ACCEPT_LANGUAGE).unwrap(),
///     ["nl", "fr", "en"],
/// );
/// ```
pub fn rank_header_values<K>(headers: &HeaderMap, name: K) -> Result<Vec<String>, Error>
where
    K: AsHeaderName,
{
    rank_values(&header_values_with_parameters(headers, name))
}

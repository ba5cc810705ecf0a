use serde::{Deserialize, Deserializer, Serialize, de};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::Error;

/// A quality value, as defined in
/// [RFC9110](https://datatracker.ietf.org/doc/html/rfc9110#section-12.4.2).
///
/// The weight is guaranteed to lie within `[0, 1]`, with a higher weight
/// meaning a stronger preference. A value without a `q` parameter
/// has the [default](Quality::ONE) weight of `1`.
///
/// Parsing accepts any decimal number (optionally signed, with fraction and
/// exponent, surrounded by whitespace) as long as it falls within range:
///
/// ```
/// use rama_negotiate::Quality;
///
/// let q: Quality = "0.8".parse().unwrap();
/// assert_eq!(q.as_f64(), 0.8);
///
/// assert!("1.5".parse::<Quality>().is_err());
/// assert!("high".parse::<Quality>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Quality(f64);

impl Quality {
    /// The highest (and default) quality.
    pub const ONE: Self = Self(1.0);

    /// The lowest quality, which marks a value as "not acceptable".
    pub const ZERO: Self = Self(0.0);

    /// Create a [`Quality`] from a weight, `None` if it is not within `[0, 1]`.
    #[must_use]
    pub fn new(weight: f64) -> Option<Self> {
        (0.0..=1.0).contains(&weight).then_some(Self(weight))
    }

    /// The weight of this quality.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::ONE
    }
}

// never NaN, see `Quality::new`
impl Eq for Quality {}

impl PartialOrd for Quality {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quality {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

impl TryFrom<f64> for Quality {
    type Error = Error;

    fn try_from(weight: f64) -> Result<Self, Self::Error> {
        Self::new(weight).ok_or_else(|| Error::invalid_quality(weight.to_string()))
    }
}

impl FromStr for Quality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_numeric(s) {
            return Err(Error::invalid_quality(s));
        }
        s.trim_matches(is_numeric_whitespace)
            .parse::<f64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| Error::invalid_quality(s))
    }
}

impl<'de> Deserialize<'de> for Quality {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let weight = f64::deserialize(deserializer)?;
        Self::try_from(weight).map_err(de::Error::custom)
    }
}

fn is_numeric_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Decimal numbers only: `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`,
/// optionally surrounded by whitespace. Rejects `inf`, `nan` and hex notation.
fn is_numeric(s: &str) -> bool {
    let s = s.trim_matches(is_numeric_whitespace).as_bytes();
    let count_digits = |from: usize| {
        s.iter()
            .skip(from)
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut pos = 0;
    if matches!(s.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(pos);
    pos += int_digits;

    let mut fraction_digits = 0;
    if s.get(pos) == Some(&b'.') {
        pos += 1;
        fraction_digits = count_digits(pos);
        pos += fraction_digits;
    }

    if int_digits == 0 && fraction_digits == 0 {
        return false;
    }

    if matches!(s.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(s.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exponent_digits = count_digits(pos);
        if exponent_digits == 0 {
            return false;
        }
        pos += exponent_digits;
    }

    pos == s.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strings() {
        for s in [
            "0", "1", "0.5", "1.0", ".5", "5.", "+0.5", "-0", "1e0", "1E-1", "5e+0", " 0.5",
            "0.5 ", "\t1\n", "000.250",
        ] {
            assert!(is_numeric(s), "expected {s:?} to be numeric");
        }
    }

    #[test]
    fn non_numeric_strings() {
        for s in [
            "", " ", ".", "+", "-", "e1", "1e", "1e+", "0x1", "inf", "NaN", "infinity", "1.2.3",
            "0,5", "invalid", "1 0", "q=1", "1f",
        ] {
            assert!(!is_numeric(s), "expected {s:?} to not be numeric");
        }
    }

    #[test]
    fn parse_in_range() {
        assert_eq!("0".parse::<Quality>().unwrap(), Quality::ZERO);
        assert_eq!("1".parse::<Quality>().unwrap(), Quality::ONE);
        assert_eq!("1.000".parse::<Quality>().unwrap(), Quality::ONE);
        assert_eq!(".5".parse::<Quality>().unwrap().as_f64(), 0.5);
        assert_eq!(" 0.25 ".parse::<Quality>().unwrap().as_f64(), 0.25);
        assert_eq!("5e-1".parse::<Quality>().unwrap().as_f64(), 0.5);
        assert_eq!("-0".parse::<Quality>().unwrap(), Quality::ZERO);
    }

    #[test]
    fn parse_out_of_range() {
        for s in ["1.5", "-0.1", "2", "1e1", "1e400", "1.0000001"] {
            let err = s.parse::<Quality>().unwrap_err();
            assert!(err.is_invalid_quality());
            assert_eq!(err.raw_quality(), s);
            assert_eq!(err.to_string(), "Invalid q value.");
        }
    }

    #[test]
    fn parse_not_numeric() {
        let err = "invalid".parse::<Quality>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid q value.");
        assert_eq!(err.raw_quality(), "invalid");
    }

    #[test]
    fn new_rejects_out_of_range_and_nan() {
        assert_eq!(Quality::new(0.3).map(Quality::as_f64), Some(0.3));
        assert!(Quality::new(1.01).is_none());
        assert!(Quality::new(-0.01).is_none());
        assert!(Quality::new(f64::NAN).is_none());
        assert!(Quality::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn ordering_by_weight() {
        let low = Quality::new(0.2).unwrap();
        let high = Quality::new(0.9).unwrap();
        assert!(low < high);
        assert!(Quality::ZERO < low);
        assert!(high < Quality::ONE);
        assert_eq!(Quality::default(), Quality::ONE);
        assert_eq!(
            "-0".parse::<Quality>().unwrap().cmp(&Quality::ZERO),
            Ordering::Equal
        );
    }

    #[test]
    fn serde_as_plain_number() {
        let q = Quality::new(0.75).unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), "0.75");
        assert_eq!(serde_json::from_str::<Quality>("0.75").unwrap(), q);
        assert_eq!(serde_json::from_str::<Quality>("1").unwrap(), Quality::ONE);
        assert!(serde_json::from_str::<Quality>("1.5").is_err());
        assert!(serde_json::from_str::<Quality>("\"0.5\"").is_err());
    }
}

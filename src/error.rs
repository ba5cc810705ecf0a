use std::error;
use std::fmt::{self, Display, Formatter};

/// Errors that can occur while ranking header values by their quality.
///
/// Splitting header values never fails; only the resolution of the
/// `q` parameter can produce an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: Kind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    InvalidQuality {
        value: Option<String>,
        raw: String,
    },
}

impl Error {
    /// Create an 'invalid quality' [`Error`] for the raw `q` parameter string.
    #[must_use]
    pub fn invalid_quality(raw: impl Into<String>) -> Self {
        Self {
            kind: Kind::InvalidQuality {
                value: None,
                raw: raw.into(),
            },
        }
    }

    /// Attach the header value which carried the offending `q` parameter.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        match &mut self.kind {
            Kind::InvalidQuality { value: slot, .. } => *slot = Some(value.into()),
        }
        self
    }

    /// Returns true if this error was caused by a `q` parameter
    /// that is not numeric or lies outside of `[0, 1]`.
    #[must_use]
    pub fn is_invalid_quality(&self) -> bool {
        matches!(self.kind, Kind::InvalidQuality { .. })
    }

    /// The (base) header value whose `q` parameter was rejected, if known.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            Kind::InvalidQuality { value, .. } => value.as_deref(),
        }
    }

    /// The raw `q` parameter string that was rejected.
    #[must_use]
    pub fn raw_quality(&self) -> &str {
        match &self.kind {
            Kind::InvalidQuality { raw, .. } => raw,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::InvalidQuality { .. } => f.write_str("Invalid q value."),
        }
    }
}

impl error::Error for Error {}

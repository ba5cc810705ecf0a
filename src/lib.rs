//! # Header value negotiation
//!
//! Parse header values that follow the comma separated, semicolon
//! parameterized convention of headers such as `Accept`, `Accept-Language`
//! and `Accept-Encoding`, and rank them by their quality (`q`) parameter.
//!
//! Two stages, usable on their own or chained:
//!
//! - [`split`]: raw header lines into value tokens and their parameters;
//! - [`quality`]: resolve the `q` parameter of each value and rank the values
//!   by descending [`Quality`].
//!
//! ```
//! use rama_negotiate::{rank_values, split_values_with_parameters};
//!
//! let values = split_values_with_parameters([
//!     "text/html,application/xhtml+xml",
//!     "application/xml;q=0.9,*/*;q=0.8",
//! ]);
//! assert_eq!(values["application/xml"]["q"], "0.9");
//!
//! assert_eq!(
//!     rank_values(&values).unwrap(),
//!     ["text/html", "application/xhtml+xml", "application/xml", "*/*"],
//! );
//! ```
//!
//! Splitting never fails. Ranking fails with an [`Error`] as soon as a value
//! carries a `q` (or `Q`) parameter that is not a number within `[0, 1]`.
//!
//! All functions are pure: they hold no state and can be called
//! concurrently without any coordination.
//!
//! # Rama
//!
//! Crate used by the end-user `rama` crate and `rama` crate authors alike.
//!
//! Learn more about `rama`:
//!
//! - Github: <https://github.com/plabayo/rama>
//! - Book: <https://ramaproxy.org/book/>

#![doc(
    html_favicon_url = "https://raw.githubusercontent.com/plabayo/rama/main/docs/img/old_logo.png"
)]
#![doc(html_logo_url = "https://raw.githubusercontent.com/plabayo/rama/main/docs/img/old_logo.png")]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(test, allow(clippy::float_cmp))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod error;
#[doc(inline)]
pub use error::Error;

pub mod quality;
pub mod split;

#[doc(inline)]
pub use self::quality::{
    Quality, QualityWeights, rank_header_lines, rank_values, rank_values_with_quality,
    resolve_quality_weights,
};
#[doc(inline)]
pub use self::split::{
    Params, ValuesWithParams, parse_parameters, split_values, split_values_with_parameters,
};

#[cfg(feature = "http")]
mod header_map;
#[cfg(feature = "http")]
#[doc(inline)]
pub use self::header_map::{
    header_values_with_parameters, rank_header_values, split_header_values,
};

pub mod dep {
    //! dependencies rama-negotiate

    pub use indexmap;

    #[cfg(feature = "http")]
    pub use http;
}

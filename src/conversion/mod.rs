//! # Parsing of loosely formatted numeric form fields
//!
//! Sky coordinates, search radii and exposure times arrive from the search form
//! as free text. This module turns them into validated numbers in canonical units:
//!
//! - [`parse_coordinate_field`] – a right ascension or declination, either a single
//!   value or a `lo .. hi` range, in degrees.
//! - [`parse_radius`] – a search cone radius with its units, converted to degrees.
//!
//! ## Range syntax
//!
//! A range is two values separated by two or more dots, with optional whitespace
//! around the separator:
//!
//! ```text
//! 10 .. 20
//! 10..20
//! 10 ..... 20
//! ```
//!
//! All failures are reported as [`QueryError`](crate::query_errors::QueryError)
//! variants whose message can be displayed verbatim.
mod coordinates;
mod radius;

use std::{fmt, sync::LazyLock};

use regex::Regex;

pub use coordinates::parse_coordinate_field;
pub use radius::{parse_radius, parse_radius_within, RadiusUnits};

static RANGE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\.{2,}\s*").expect("range separator pattern is valid"));

/// Split a trimmed, non-empty field on the range separator.
///
/// Each token is trimmed. The caller decides how many tokens are acceptable.
pub(crate) fn split_range(value: &str) -> Vec<&str> {
    RANGE_SEPARATOR.split(value).map(str::trim).collect()
}

/// Trim a raw optional form value, mapping blank input to `None`.
pub(crate) fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// The two equatorial coordinates a user may constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateKind {
    RightAscension,
    Declination,
}

impl fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateKind::RightAscension => write!(f, "right ascension"),
            CoordinateKind::Declination => write!(f, "declination"),
        }
    }
}

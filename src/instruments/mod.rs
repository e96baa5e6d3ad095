//! # Instrument-specific search parameters
//!
//! Each instrument of the archive has its own optional search fields. This module
//! defines them and builds the sub-condition each instrument contributes:
//!
//! | instrument | fields                                                |
//! |------------|-------------------------------------------------------|
//! | Salticam   | detector mode, filter, exposure time                  |
//! | RSS        | detector mode, spectroscopic mode, exposure time      |
//! | HRS        | mode, exposure time                                   |
//! | BVIT       | filter                                                |
//! | HIPPO      | –                                                     |
//! | SHOC       | –                                                     |
//! | SpUpNIC    | –                                                     |
//!
//! Every instrument condition asserts that the instrument's identifier column is not
//! null, so selecting an instrument restricts results to its observations even when
//! no other field is filled in.
//!
//! Form labels are mapped to archive codes through the tables in [`modes`].
mod bvit;
mod hrs;
pub mod modes;
mod rss;
mod salticam;

use serde::Deserialize;

use crate::{
    constants::Seconds,
    conversion::{non_blank, split_range},
    query_errors::QueryError,
    where_condition::WhereCondition,
};

pub use bvit::BvitParams;
pub use hrs::HrsParams;
pub use rss::RssParams;
pub use salticam::SalticamParams;

/// Instruments of the Lesedi and 1.9 m telescopes. The archive does not yet filter
/// on any of their settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HippoParams {}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShocParams {}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SpupnicParams {}

/// A requested exposure time, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExposureTime {
    Exact(Seconds),
    /// Closed range, `lo < hi`.
    Between(Seconds, Seconds),
}

impl ExposureTime {
    /// Parse an optional exposure time field
    ///
    /// Arguments
    /// ---------
    /// * `raw`: a non-negative number of seconds, or a range `lo .. hi`
    ///
    /// Return
    /// ------
    /// * `None` for a blank field
    /// * an exact value, or a range sorted ascending. A range with equal bounds is
    ///   an exact value.
    pub fn parse(raw: Option<&str>) -> Result<Option<Self>, QueryError> {
        let Some(value) = non_blank(raw) else {
            return Ok(None);
        };
        let invalid = || QueryError::InvalidExposureTime(value.to_string());

        let seconds = split_range(value)
            .into_iter()
            .map(|token| match token.parse::<f64>() {
                Ok(s) if s.is_finite() && s >= 0.0 => Ok(s),
                _ => Err(invalid()),
            })
            .collect::<Result<Vec<Seconds>, QueryError>>()?;

        match seconds[..] {
            [exact] => Ok(Some(ExposureTime::Exact(exact))),
            [a, b] if a == b => Ok(Some(ExposureTime::Exact(a))),
            [a, b] => Ok(Some(ExposureTime::Between(a.min(b), a.max(b)))),
            _ => Err(invalid()),
        }
    }

    pub fn condition(&self, column: &str) -> WhereCondition {
        match *self {
            ExposureTime::Exact(s) => WhereCondition::equals(column, s),
            ExposureTime::Between(lo, hi) => WhereCondition::and(vec![
                WhereCondition::greater_equal(column, lo),
                WhereCondition::less_equal(column, hi),
            ]),
        }
    }
}

/// Exposure time sub-condition, absent for a blank field.
pub(crate) fn exposure_time_condition(
    raw: Option<&str>,
    column: &str,
) -> Result<Option<WhereCondition>, QueryError> {
    Ok(ExposureTime::parse(raw)?.map(|t| t.condition(column)))
}

/// Free-text filter name, compared for equality after trimming.
pub(crate) fn filter_condition(raw: Option<&str>, column: &str) -> Option<WhereCondition> {
    non_blank(raw).map(|filter| WhereCondition::equals(column, filter))
}

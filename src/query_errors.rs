use thiserror::Error;

use crate::conversion::CoordinateKind;

/// Validation failures raised while turning form input into a condition tree.
///
/// The `Display` text of every variant is the message shown to the user, so
/// callers may render it verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("{value} is neither a {kind} nor a {kind} range.")]
    InvalidCoordinateFormat { value: String, kind: CoordinateKind },

    #[error("{value} is not a valid {kind}.")]
    InvalidCoordinate { value: String, kind: CoordinateKind },

    #[error("{kind} range must not have length 0.")]
    ZeroLengthRange { kind: CoordinateKind },

    #[error("a search cone radius cannot be combined with a right ascension or declination range.")]
    RangeWithRadius,

    #[error("a search cone radius requires both a right ascension and a declination.")]
    RadiusWithoutPosition,

    #[error("radius must be a positive number.")]
    NonPositiveRadius,

    #[error("you must supply the units of the radius.")]
    MissingRadiusUnits,

    #[error("units {0} are not supported.")]
    UnsupportedRadiusUnits(String),

    #[error("radius must not be greater than {max} degrees.")]
    RadiusTooLarge { max: f64 },

    #[error("{0} is not a valid observation night (expected YYYY-MM-DD).")]
    InvalidObservationNight(String),

    #[error("{0} is neither a valid exposure time nor a valid exposure time range.")]
    InvalidExposureTime(String),

    #[error("{0} is not a supported detector mode.")]
    UnsupportedDetectorMode(String),

    #[error("{0} is not a supported HRS mode.")]
    UnsupportedHrsMode(String),

    #[error("{0} is not a supported RSS mode.")]
    UnsupportedRssMode(String),

    #[error("Invalid query configuration: {0}")]
    InvalidQueryConfig(String),
}

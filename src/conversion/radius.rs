use std::str::FromStr;

use crate::{
    constants::{Degree, ARCMIN_PER_DEGREE, ARCSEC_PER_DEGREE, MAX_SEARCH_CONE_RADIUS},
    query_errors::QueryError,
};

use super::non_blank;

/// Units a search cone radius may be given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusUnits {
    Degrees,
    Arcminutes,
    Arcseconds,
}

impl RadiusUnits {
    /// Convert a radius expressed in these units to degrees.
    pub fn to_degrees(&self, value: f64) -> Degree {
        match self {
            RadiusUnits::Degrees => value,
            RadiusUnits::Arcminutes => value / ARCMIN_PER_DEGREE,
            RadiusUnits::Arcseconds => value / ARCSEC_PER_DEGREE,
        }
    }
}

impl FromStr for RadiusUnits {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "degrees" => Ok(RadiusUnits::Degrees),
            "arcminutes" => Ok(RadiusUnits::Arcminutes),
            "arcseconds" => Ok(RadiusUnits::Arcseconds),
            other => Err(QueryError::UnsupportedRadiusUnits(other.to_string())),
        }
    }
}

/// Parse a search cone radius, bounded by the default maximum radius.
///
/// See [`parse_radius_within`] for the details.
pub fn parse_radius(raw: Option<&str>, units: Option<&str>) -> Result<Degree, QueryError> {
    parse_radius_within(raw, units, MAX_SEARCH_CONE_RADIUS)
}

/// Parse a search cone radius and convert it to degrees
///
/// Arguments
/// ---------
/// * `raw`: the radius as typed by the user
/// * `units`: one of `degrees`, `arcminutes` or `arcseconds`
/// * `max_radius`: the largest admissible radius, in degrees
///
/// Return
/// ------
/// * `0.0` if no radius was given; applying a default is up to the caller
/// * the radius in degrees otherwise
///
/// Errors
/// ------
/// The value is checked before the units, so a malformed radius without units
/// reports the radius problem.
pub fn parse_radius_within(
    raw: Option<&str>,
    units: Option<&str>,
    max_radius: Degree,
) -> Result<Degree, QueryError> {
    let Some(value) = non_blank(raw) else {
        return Ok(0.0);
    };

    let radius = match value.parse::<f64>() {
        Ok(r) if r.is_finite() && r > 0.0 => r,
        _ => return Err(QueryError::NonPositiveRadius),
    };

    let units = non_blank(units)
        .ok_or(QueryError::MissingRadiusUnits)?
        .parse::<RadiusUnits>()?;

    let radius_deg = units.to_degrees(radius);
    if radius_deg > max_radius {
        return Err(QueryError::RadiusTooLarge { max: max_radius });
    }

    Ok(radius_deg)
}

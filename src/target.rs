//! # Target position resolution
//!
//! Combines the right ascension, declination and search cone radius fields of the
//! search form into one normalized [`TargetPosition`].
//!
//! ## Shapes
//!
//! A resolved target has one of three shapes (see [`TargetShape`]):
//!
//! | right ascension | declination | result                                          |
//! |-----------------|-------------|-------------------------------------------------|
//! | –               | –           | unconstrained                                   |
//! | value           | value       | cone search, explicit or default radius         |
//! | value           | – / range   | RA widened to `[ra - D, ra + D]`, wrapped       |
//! | – / range       | value       | Dec widened to `[dec - D, dec + D]`, clamped    |
//! | range / –       | range / –   | ranges as given                                 |
//!
//! where `D` is the configured default search cone radius.
//!
//! ## Wrapping vs clamping
//!
//! Right ascension is cyclic, so a widened bound below 0° or above 360° wraps
//! around and the resulting range may have `lo > hi`. Declination stops at the poles,
//! so widened bounds are clamped to [-90°, 90°].
//!
//! A range and an explicit radius never coexist in a resolved target.
use log::debug;
use serde::Deserialize;

use crate::{
    constants::{Degree, MAX_DECLINATION, MAX_RIGHT_ASCENSION, MIN_DECLINATION, MIN_RIGHT_ASCENSION},
    conversion::{non_blank, parse_coordinate_field, parse_radius_within, CoordinateKind},
    query_config::QueryConfig,
    query_errors::QueryError,
};

/// Raw target fields, as entered in the search form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TargetParams {
    pub right_ascension: Option<String>,
    pub declination: Option<String>,
    pub search_cone_radius: Option<String>,
    pub search_cone_radius_units: Option<String>,
}

impl TargetParams {
    /// Resolve the fields into a [`TargetPosition`] using the given configuration.
    ///
    /// Arguments
    /// ---------
    /// * `config`: provides the default and maximum search cone radius
    ///
    /// Return
    /// ------
    /// * the normalized target, or the first validation error encountered
    ///
    /// Errors
    /// ------
    /// * any coordinate or radius parsing error
    /// * [`QueryError::RangeWithRadius`] if a coordinate range is given together
    ///   with a radius
    /// * [`QueryError::RadiusWithoutPosition`] if a radius is given with only one
    ///   coordinate
    pub fn resolve(&self, config: &QueryConfig) -> Result<TargetPosition, QueryError> {
        let mut right_ascensions = parse_coordinate_field(
            self.right_ascension.as_deref(),
            CoordinateKind::RightAscension,
        )?;
        let mut declinations =
            parse_coordinate_field(self.declination.as_deref(), CoordinateKind::Declination)?;

        if right_ascensions.is_empty() && declinations.is_empty() {
            return Ok(TargetPosition::unconstrained());
        }

        let radius_given = non_blank(self.search_cone_radius.as_deref()).is_some();
        if radius_given && (right_ascensions.len() == 2 || declinations.len() == 2) {
            return Err(QueryError::RangeWithRadius);
        }

        let half_width = config.default_search_cone_radius();
        if right_ascensions.len() == 1 && declinations.len() != 1 {
            let ra = right_ascensions[0];
            right_ascensions = vec![
                wrap_right_ascension(ra - half_width),
                wrap_right_ascension(ra + half_width),
            ];
            debug!("Widened lone right ascension {ra} to {right_ascensions:?}");
        }
        if declinations.len() == 1 && right_ascensions.len() != 1 {
            let dec = declinations[0];
            declinations = vec![
                clamp_declination(dec - half_width),
                clamp_declination(dec + half_width),
            ];
            debug!("Widened lone declination {dec} to {declinations:?}");
        }

        let radius = parse_radius_within(
            self.search_cone_radius.as_deref(),
            self.search_cone_radius_units.as_deref(),
            config.max_search_cone_radius(),
        )?;

        let is_point = right_ascensions.len() == 1 && declinations.len() == 1;
        let search_cone_radius = match (is_point, radius > 0.0) {
            (true, true) => radius,
            (true, false) => half_width,
            (false, true) => return Err(QueryError::RadiusWithoutPosition),
            (false, false) => 0.0,
        };

        Ok(TargetPosition {
            right_ascensions,
            declinations,
            search_cone_radius,
        })
    }
}

/// Resolve the target fields with the default [`QueryConfig`].
pub fn resolve_target(target: &TargetParams) -> Result<TargetPosition, QueryError> {
    target.resolve(&QueryConfig::default())
}

/// Bring a right ascension back into [0°, 360°] after widening.
fn wrap_right_ascension(ra: Degree) -> Degree {
    if (MIN_RIGHT_ASCENSION..=MAX_RIGHT_ASCENSION).contains(&ra) {
        ra
    } else {
        ra.rem_euclid(MAX_RIGHT_ASCENSION)
    }
}

fn clamp_declination(dec: Degree) -> Degree {
    dec.clamp(MIN_DECLINATION, MAX_DECLINATION)
}

/// A normalized search target.
///
/// Either both coordinate lists hold exactly one value and the search cone radius is
/// positive (a cone search), or each list is empty or a two-value closed range and
/// the radius is zero. Instances only come out of [`TargetParams::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct TargetPosition {
    right_ascensions: Vec<Degree>,
    declinations: Vec<Degree>,
    search_cone_radius: Degree,
}

/// The query shape a [`TargetPosition`] stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetShape {
    /// No target constraint at all.
    Unconstrained,
    /// Everything within `radius` degrees of (`right_ascension`, `declination`).
    Cone {
        right_ascension: Degree,
        declination: Degree,
        radius: Degree,
    },
    /// Independent coordinate ranges. A right ascension range with `lo > hi`
    /// crosses the 0°/360° seam.
    Ranges {
        right_ascension: Option<(Degree, Degree)>,
        declination: Option<(Degree, Degree)>,
    },
}

impl TargetPosition {
    fn unconstrained() -> Self {
        TargetPosition {
            right_ascensions: Vec::new(),
            declinations: Vec::new(),
            search_cone_radius: 0.0,
        }
    }

    pub fn right_ascensions(&self) -> &[Degree] {
        &self.right_ascensions
    }

    pub fn declinations(&self) -> &[Degree] {
        &self.declinations
    }

    /// Radius of the cone search in degrees, `0.0` unless the target is a cone.
    pub fn search_cone_radius(&self) -> Degree {
        self.search_cone_radius
    }

    pub fn shape(&self) -> TargetShape {
        fn range(values: &[Degree]) -> Option<(Degree, Degree)> {
            match values {
                [lo, hi] => Some((*lo, *hi)),
                _ => None,
            }
        }

        match (&self.right_ascensions[..], &self.declinations[..]) {
            ([], []) => TargetShape::Unconstrained,
            ([ra], [dec]) => TargetShape::Cone {
                right_ascension: *ra,
                declination: *dec,
                radius: self.search_cone_radius,
            },
            (ras, decs) => TargetShape::Ranges {
                right_ascension: range(ras),
                declination: range(decs),
            },
        }
    }
}

#[cfg(test)]
mod target_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn target(ra: Option<&str>, dec: Option<&str>) -> TargetParams {
        TargetParams {
            right_ascension: ra.map(String::from),
            declination: dec.map(String::from),
            ..Default::default()
        }
    }

    fn with_radius(mut params: TargetParams, radius: &str, units: &str) -> TargetParams {
        params.search_cone_radius = Some(radius.into());
        params.search_cone_radius_units = Some(units.into());
        params
    }

    #[test]
    fn test_wrap_right_ascension() {
        assert_abs_diff_eq!(wrap_right_ascension(-0.05), 359.95, epsilon = 1e-9);
        assert_abs_diff_eq!(wrap_right_ascension(360.05), 0.05, epsilon = 1e-9);
        assert_eq!(wrap_right_ascension(360.0), 360.0);
        assert_eq!(wrap_right_ascension(12.0), 12.0);
        assert_abs_diff_eq!(wrap_right_ascension(-400.0), 320.0, epsilon = 1e-9);
        assert_abs_diff_eq!(wrap_right_ascension(750.0), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_clamp_declination() {
        assert_eq!(clamp_declination(90.05), 90.0);
        assert_eq!(clamp_declination(-90.05), -90.0);
        assert_eq!(clamp_declination(12.0), 12.0);
    }

    #[test]
    fn test_empty_target() {
        let pos = resolve_target(&TargetParams::default()).unwrap();
        assert_eq!(pos.shape(), TargetShape::Unconstrained);
        assert_eq!(pos.search_cone_radius(), 0.0);

        // a radius without any coordinate is ignored
        let pos = resolve_target(&with_radius(target(None, None), "2", "degrees")).unwrap();
        assert_eq!(pos.shape(), TargetShape::Unconstrained);
    }

    #[test]
    fn test_point_with_default_radius() {
        let pos = resolve_target(&target(Some("23"), Some("-45"))).unwrap();
        assert_eq!(pos.right_ascensions(), &[23.0]);
        assert_eq!(pos.declinations(), &[-45.0]);
        assert_eq!(pos.search_cone_radius(), 0.05);
    }

    #[test]
    fn test_point_with_explicit_radius() {
        let pos =
            resolve_target(&with_radius(target(Some("23"), Some("-45")), "1.8", "arcminutes"))
                .unwrap();
        assert_abs_diff_eq!(pos.search_cone_radius(), 0.03, epsilon = 1e-6);
        assert!(matches!(pos.shape(), TargetShape::Cone { .. }));
    }

    #[test]
    fn test_lone_right_ascension_is_widened() {
        let pos = resolve_target(&target(Some("23"), Some("10 .. 20"))).unwrap();
        assert_abs_diff_eq!(pos.right_ascensions()[0], 22.95, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.right_ascensions()[1], 23.05, epsilon = 1e-9);
        assert_eq!(pos.declinations(), &[10.0, 20.0]);
        assert_eq!(pos.search_cone_radius(), 0.0);
    }

    #[test]
    fn test_lone_right_ascension_wraps_at_seam() {
        let pos = resolve_target(&target(Some("0"), None)).unwrap();
        assert_abs_diff_eq!(pos.right_ascensions()[0], 359.95, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.right_ascensions()[1], 0.05, epsilon = 1e-9);
        assert!(pos.declinations().is_empty());
    }

    #[test]
    fn test_lone_declination_is_clamped() {
        let pos = resolve_target(&target(None, Some("-90"))).unwrap();
        assert!(pos.right_ascensions().is_empty());
        assert_eq!(pos.declinations()[0], -90.0);
        assert_abs_diff_eq!(pos.declinations()[1], -89.95, epsilon = 1e-9);
    }

    #[test]
    fn test_ranges_pass_through() {
        let pos = resolve_target(&target(Some("350 .. 10"), Some("30 .. -30"))).unwrap();
        assert_eq!(
            pos.shape(),
            TargetShape::Ranges {
                right_ascension: Some((350.0, 10.0)),
                declination: Some((-30.0, 30.0)),
            }
        );
    }

    #[test]
    fn test_range_with_radius() {
        let res = resolve_target(&with_radius(target(Some("3 .. 5"), None), "2", "arcminutes"));
        assert_eq!(res, Err(QueryError::RangeWithRadius));

        let res = resolve_target(&with_radius(
            target(Some("3"), Some("5 .. 7")),
            "2",
            "arcminutes",
        ));
        assert_eq!(res, Err(QueryError::RangeWithRadius));
    }

    #[test]
    fn test_radius_with_lone_coordinate() {
        let res = resolve_target(&with_radius(target(None, Some("12")), "2", "arcminutes"));
        assert_eq!(res, Err(QueryError::RadiusWithoutPosition));
    }

    #[test]
    fn test_radius_errors_surface() {
        let res = resolve_target(&with_radius(target(Some("3"), Some("5")), "20", "degrees"));
        assert_eq!(res, Err(QueryError::RadiusTooLarge { max: 10.0 }));

        let mut params = target(Some("3"), Some("5"));
        params.search_cone_radius = Some("2".into());
        assert_eq!(resolve_target(&params), Err(QueryError::MissingRadiusUnits));
    }

    #[test]
    fn test_custom_default_radius() {
        let config = QueryConfig::builder()
            .default_search_cone_radius(1.0)
            .build()
            .unwrap();
        let pos = target(Some("359.5"), None).resolve(&config).unwrap();
        assert_abs_diff_eq!(pos.right_ascensions()[0], 358.5, epsilon = 1e-9);
        assert_abs_diff_eq!(pos.right_ascensions()[1], 0.5, epsilon = 1e-9);

        let pos = target(Some("1"), Some("2")).resolve(&config).unwrap();
        assert_eq!(pos.search_cone_radius(), 1.0);
    }
}

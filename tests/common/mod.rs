#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use ssda_query::TargetParams;

pub const EPSILON: f64 = 1e-6;

pub fn assert_values_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "expected {expected:?}, got {actual:?}"
    );
    for (a, e) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(*a, *e, epsilon = EPSILON);
    }
}

pub fn target(ra: Option<&str>, dec: Option<&str>) -> TargetParams {
    TargetParams {
        right_ascension: ra.map(String::from),
        declination: dec.map(String::from),
        ..Default::default()
    }
}

pub fn target_with_radius(
    ra: Option<&str>,
    dec: Option<&str>,
    radius: &str,
    units: &str,
) -> TargetParams {
    TargetParams {
        search_cone_radius: Some(radius.into()),
        search_cone_radius_units: Some(units.into()),
        ..target(ra, dec)
    }
}

use crate::{
    constants::{Degree, MAX_DECLINATION, MAX_RIGHT_ASCENSION, MIN_DECLINATION, MIN_RIGHT_ASCENSION},
    query_errors::QueryError,
};

use super::{non_blank, split_range, CoordinateKind};

impl CoordinateKind {
    /// Closed interval of admissible values, in degrees.
    pub fn bounds(&self) -> (Degree, Degree) {
        match self {
            CoordinateKind::RightAscension => (MIN_RIGHT_ASCENSION, MAX_RIGHT_ASCENSION),
            CoordinateKind::Declination => (MIN_DECLINATION, MAX_DECLINATION),
        }
    }

    fn parse_value(&self, token: &str) -> Result<Degree, QueryError> {
        let (lo, hi) = self.bounds();
        match token.parse::<f64>() {
            Ok(value) if (lo..=hi).contains(&value) => Ok(value),
            _ => Err(QueryError::InvalidCoordinate {
                value: token.to_string(),
                kind: *self,
            }),
        }
    }
}

/// Parse a right ascension or declination form field
///
/// Arguments
/// ---------
/// * `raw`: the raw field content, either absent, a single value in degrees or a
///   range `lo .. hi`
/// * `kind`: which coordinate the field holds, selecting its bounds
///
/// Return
/// ------
/// * an empty vector if the field is absent or blank
/// * a single value for a lone coordinate
/// * two values for a range. Declination ranges are sorted ascending. Right ascension
///   ranges keep the input order, so a range crossing the 0°/360° seam stays
///   recognisable by `lo > hi`.
pub fn parse_coordinate_field(
    raw: Option<&str>,
    kind: CoordinateKind,
) -> Result<Vec<Degree>, QueryError> {
    let Some(value) = non_blank(raw) else {
        return Ok(Vec::new());
    };

    let tokens = split_range(value);
    if tokens.is_empty() || tokens.len() > 2 {
        return Err(QueryError::InvalidCoordinateFormat {
            value: value.to_string(),
            kind,
        });
    }

    let mut values = tokens
        .iter()
        .map(|token| kind.parse_value(token))
        .collect::<Result<Vec<Degree>, QueryError>>()?;

    if let [first, second] = values[..] {
        if first == second {
            return Err(QueryError::ZeroLengthRange { kind });
        }
        if kind == CoordinateKind::Declination && first > second {
            values.swap(0, 1);
        }
    }

    Ok(values)
}

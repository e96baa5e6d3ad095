//! SQL-like rendering of condition trees, used in log output.
//!
//! The rendering is for humans only; the query engine consumes the serialized
//! tree, never this text.
use std::fmt;

use itertools::Itertools;

use super::{Value, WhereCondition};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Value::Instant(epoch) => write!(f, "'{epoch}'"),
        }
    }
}

fn join(f: &mut fmt::Formatter<'_>, children: &[WhereCondition], op: &str) -> fmt::Result {
    match children {
        [] => write!(f, "TRUE"),
        [single] => write!(f, "{single}"),
        _ => write!(f, "({})", children.iter().join(op)),
    }
}

impl fmt::Display for WhereCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WhereCondition::And(children) => join(f, children, " AND "),
            WhereCondition::Or(children) => join(f, children, " OR "),
            WhereCondition::Not(child) => write!(f, "NOT ({child})"),
            WhereCondition::Equals { column, value } => write!(f, "{column} = {value}"),
            WhereCondition::IsNull { column } => write!(f, "{column} IS NULL"),
            WhereCondition::LessThan { column, value } => write!(f, "{column} < {value}"),
            WhereCondition::GreaterThan { column, value } => write!(f, "{column} > {value}"),
            WhereCondition::LessEqual { column, value } => write!(f, "{column} <= {value}"),
            WhereCondition::GreaterEqual { column, value } => write!(f, "{column} >= {value}"),
            WhereCondition::IsIn { column, values } => {
                write!(f, "{column} IN ({})", values.iter().join(", "))
            }
            WhereCondition::Contains { column, value } => {
                write!(f, "{column} LIKE {}", Value::Text(format!("%{value}%")))
            }
            WhereCondition::StartsWith { column, value } => {
                write!(f, "{column} LIKE {}", Value::Text(format!("{value}%")))
            }
            WhereCondition::EndsWith { column, value } => {
                write!(f, "{column} LIKE {}", Value::Text(format!("%{value}")))
            }
            WhereCondition::WithinRadius {
                right_ascension,
                declination,
                radius,
                right_ascension_column,
                declination_column,
            } => write!(
                f,
                "WITHIN_RADIUS(({right_ascension_column}, {declination_column}), ({right_ascension}, {declination}), {radius})"
            ),
        }
    }
}

#[cfg(test)]
mod display_test {
    use super::*;

    #[test]
    fn test_leaf_rendering() {
        assert_eq!(
            WhereCondition::equals("salticam.filter", "O'Neil").to_string(),
            "salticam.filter = 'O''Neil'"
        );
        assert_eq!(
            WhereCondition::contains("proposal.principal_investigator", "Buck").to_string(),
            "proposal.principal_investigator LIKE '%Buck%'"
        );
        assert_eq!(
            WhereCondition::ends_with("proposal.proposal_code", "001").to_string(),
            "proposal.proposal_code LIKE '%001'"
        );
        assert_eq!(
            WhereCondition::is_in("hrs.hrs_mode", ["LR", "MR"]).to_string(),
            "hrs.hrs_mode IN ('LR', 'MR')"
        );
        assert_eq!(
            WhereCondition::within_radius(10.5, -20.0, 0.05, "target.ra", "target.dec")
                .to_string(),
            "WITHIN_RADIUS((target.ra, target.dec), (10.5, -20), 0.05)"
        );
    }

    #[test]
    fn test_composite_rendering() {
        let condition = WhereCondition::or(vec![
            WhereCondition::and(vec![
                WhereCondition::greater_equal("target.ra", 350.0),
                WhereCondition::less_equal("target.ra", 360.0),
            ]),
            WhereCondition::and(vec![
                WhereCondition::greater_equal("target.ra", 0.0),
                WhereCondition::less_equal("target.ra", 10.0),
            ]),
        ]);
        assert_eq!(
            condition.to_string(),
            "((target.ra >= 350 AND target.ra <= 360) OR (target.ra >= 0 AND target.ra <= 10))"
        );
        assert_eq!(WhereCondition::and(vec![]).to_string(), "TRUE");
        assert_eq!(
            WhereCondition::and(vec![WhereCondition::is_null("bvit.bvit_id")]).to_string(),
            "bvit.bvit_id IS NULL"
        );
    }
}

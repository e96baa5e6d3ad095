//! # Condition trees
//!
//! [`WhereCondition`] is the recursive boolean/comparison structure the compiler
//! produces and an external query engine executes. Composite nodes own their
//! children and leaves own their values, so a condition is always a finite tree.
//!
//! The associated constructors form a small DSL. They wrap their arguments into the
//! matching node and do no validation:
//!
//! ```rust
//! use ssda_query::where_condition::WhereCondition;
//!
//! let condition = WhereCondition::and(vec![
//!     WhereCondition::greater_equal("target.ra", 350.0),
//!     WhereCondition::not(WhereCondition::is_null("observation.salt_id")),
//! ]);
//! assert_eq!(
//!     condition.to_string(),
//!     "(target.ra >= 350 AND NOT (observation.salt_id IS NULL))"
//! );
//! ```
//!
//! ## Serialization
//!
//! The tree serializes as nested objects keyed by operator name, ready to be
//! embedded in a backend query:
//!
//! ```text
//! {"AND": [{"GREATER_EQUAL": {"column": "target.ra", "value": 350.0}}, ...]}
//! ```
mod display;

use hifitime::Epoch;
use serde::{Serialize, Serializer};

use crate::constants::Degree;

/// A scalar compared against a column.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    /// A UTC instant, serialized in its ISO 8601 form.
    Instant(Epoch),
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Instant(epoch) => serializer.collect_str(epoch),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Epoch> for Value {
    fn from(epoch: Epoch) -> Self {
        Value::Instant(epoch)
    }
}

/// A node of a condition tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WhereCondition {
    And(Vec<WhereCondition>),
    Or(Vec<WhereCondition>),
    Not(Box<WhereCondition>),
    Equals {
        column: String,
        value: Value,
    },
    IsNull {
        column: String,
    },
    LessThan {
        column: String,
        value: Value,
    },
    GreaterThan {
        column: String,
        value: Value,
    },
    LessEqual {
        column: String,
        value: Value,
    },
    GreaterEqual {
        column: String,
        value: Value,
    },
    IsIn {
        column: String,
        values: Vec<Value>,
    },
    Contains {
        column: String,
        value: String,
    },
    StartsWith {
        column: String,
        value: String,
    },
    EndsWith {
        column: String,
        value: String,
    },
    #[serde(rename_all = "camelCase")]
    WithinRadius {
        right_ascension: Degree,
        declination: Degree,
        radius: Degree,
        right_ascension_column: String,
        declination_column: String,
    },
}

impl WhereCondition {
    /// Conjunction of `conditions`. An empty conjunction is no constraint.
    pub fn and(conditions: Vec<WhereCondition>) -> Self {
        WhereCondition::And(conditions)
    }

    /// Conjunction of the conditions that actually constrain something.
    ///
    /// Vacuous children (see [`WhereCondition::is_vacuous`]) are dropped.
    pub fn and_all(conditions: impl IntoIterator<Item = WhereCondition>) -> Self {
        WhereCondition::And(
            conditions
                .into_iter()
                .filter(|c| !c.is_vacuous())
                .collect(),
        )
    }

    pub fn or(conditions: Vec<WhereCondition>) -> Self {
        WhereCondition::Or(conditions)
    }

    pub fn not(condition: WhereCondition) -> Self {
        WhereCondition::Not(Box::new(condition))
    }

    pub fn equals(column: impl Into<String>, value: impl Into<Value>) -> Self {
        WhereCondition::Equals {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn is_null(column: impl Into<String>) -> Self {
        WhereCondition::IsNull {
            column: column.into(),
        }
    }

    /// Shorthand for `NOT(IS_NULL(column))`.
    pub fn is_not_null(column: impl Into<String>) -> Self {
        Self::not(Self::is_null(column))
    }

    pub fn less_than(column: impl Into<String>, value: impl Into<Value>) -> Self {
        WhereCondition::LessThan {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn greater_than(column: impl Into<String>, value: impl Into<Value>) -> Self {
        WhereCondition::GreaterThan {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn less_equal(column: impl Into<String>, value: impl Into<Value>) -> Self {
        WhereCondition::LessEqual {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn greater_equal(column: impl Into<String>, value: impl Into<Value>) -> Self {
        WhereCondition::GreaterEqual {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn is_in<V: Into<Value>>(
        column: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        WhereCondition::IsIn {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(column: impl Into<String>, value: impl Into<String>) -> Self {
        WhereCondition::Contains {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn starts_with(column: impl Into<String>, value: impl Into<String>) -> Self {
        WhereCondition::StartsWith {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn ends_with(column: impl Into<String>, value: impl Into<String>) -> Self {
        WhereCondition::EndsWith {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Cone search around (`right_ascension`, `declination`), all angles in degrees.
    pub fn within_radius(
        right_ascension: Degree,
        declination: Degree,
        radius: Degree,
        right_ascension_column: impl Into<String>,
        declination_column: impl Into<String>,
    ) -> Self {
        WhereCondition::WithinRadius {
            right_ascension,
            declination,
            radius,
            right_ascension_column: right_ascension_column.into(),
            declination_column: declination_column.into(),
        }
    }

    /// True for an empty `AND` or `OR`, which place no constraint on the result.
    pub fn is_vacuous(&self) -> bool {
        match self {
            WhereCondition::And(children) | WhereCondition::Or(children) => children.is_empty(),
            _ => false,
        }
    }
}

//! # Configuration of the query compiler
//!
//! [`QueryConfig`] gathers the tunable parts of target resolution and compilation:
//! the default search cone radius, the largest radius a user may request, and the
//! [`ColumnNames`] the condition tree refers to.
//!
//! Defaults come from [`crate::constants`]. Custom values go through the
//! validating [`QueryConfigBuilder`]; the fields are private, so every instance
//! holds validated radii:
//!
//! ```rust
//! use ssda_query::query_config::QueryConfig;
//!
//! let config = QueryConfig::builder()
//!     .default_search_cone_radius(0.1)
//!     .max_search_cone_radius(5.0)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.max_search_cone_radius(), 5.0);
//! ```
use std::cmp::Ordering::{Equal, Greater, Less};

use crate::{
    columns::ColumnNames,
    constants::{
        Degree, DEFAULT_SEARCH_CONE_RADIUS, DEFAULT_SEARCH_CONE_RADIUS_LIMIT,
        MAX_SEARCH_CONE_RADIUS,
    },
    query_errors::QueryError,
};

/// Parameters shared by target resolution and query compilation.
///
/// Default values
/// -----------------
/// * `default_search_cone_radius`: [`DEFAULT_SEARCH_CONE_RADIUS`] (0.05°)
/// * `max_search_cone_radius`: [`MAX_SEARCH_CONE_RADIUS`] (10°)
/// * `columns`: [`ColumnNames::default`]
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    default_search_cone_radius: Degree,
    max_search_cone_radius: Degree,
    columns: ColumnNames,
}

impl QueryConfig {
    /// Equivalent to [`QueryConfig::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`QueryConfigBuilder`] initialized with the default values.
    pub fn builder() -> QueryConfigBuilder {
        QueryConfigBuilder::new()
    }

    /// Radius of a cone search without explicit radius, and half-width of the
    /// range a lone coordinate is widened into (degrees).
    pub fn default_search_cone_radius(&self) -> Degree {
        self.default_search_cone_radius
    }

    /// Largest radius a user may request (degrees).
    pub fn max_search_cone_radius(&self) -> Degree {
        self.max_search_cone_radius
    }

    pub fn columns(&self) -> &ColumnNames {
        &self.columns
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        QueryConfig {
            default_search_cone_radius: DEFAULT_SEARCH_CONE_RADIUS,
            max_search_cone_radius: MAX_SEARCH_CONE_RADIUS,
            columns: ColumnNames::default(),
        }
    }
}

/// Builder for [`QueryConfig`], with validation.
#[derive(Debug, Clone)]
pub struct QueryConfigBuilder {
    config: QueryConfig,
}

impl Default for QueryConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: QueryConfig::default(),
        }
    }

    pub fn default_search_cone_radius(mut self, v: Degree) -> Self {
        self.config.default_search_cone_radius = v;
        self
    }

    pub fn max_search_cone_radius(mut self, v: Degree) -> Self {
        self.config.max_search_cone_radius = v;
        self
    }

    pub fn columns(mut self, columns: ColumnNames) -> Self {
        self.config.columns = columns;
        self
    }

    /// Return true iff x > 0.0, finite and comparable (i.e., not NaN).
    #[inline]
    fn positive(x: f64) -> bool {
        x.is_finite() && x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * both radii are finite and strictly positive
    /// * `default_search_cone_radius < DEFAULT_SEARCH_CONE_RADIUS_LIMIT` (180°)
    /// * `default_search_cone_radius <= max_search_cone_radius`
    pub fn build(self) -> Result<QueryConfig, QueryError> {
        let c = &self.config;

        if !Self::positive(c.default_search_cone_radius) {
            return Err(QueryError::InvalidQueryConfig(format!(
                "default_search_cone_radius must be a positive number, got {}",
                c.default_search_cone_radius
            )));
        }
        if c.default_search_cone_radius >= DEFAULT_SEARCH_CONE_RADIUS_LIMIT {
            return Err(QueryError::InvalidQueryConfig(format!(
                "default_search_cone_radius must be below {DEFAULT_SEARCH_CONE_RADIUS_LIMIT} degrees, got {}",
                c.default_search_cone_radius
            )));
        }
        if !Self::positive(c.max_search_cone_radius) {
            return Err(QueryError::InvalidQueryConfig(format!(
                "max_search_cone_radius must be a positive number, got {}",
                c.max_search_cone_radius
            )));
        }
        if !matches!(
            c.default_search_cone_radius
                .partial_cmp(&c.max_search_cone_radius),
            Some(Less) | Some(Equal)
        ) {
            return Err(QueryError::InvalidQueryConfig(format!(
                "default_search_cone_radius ({}) exceeds max_search_cone_radius ({})",
                c.default_search_cone_radius, c.max_search_cone_radius
            )));
        }

        Ok(self.config)
    }
}

//! # ssda-query
//!
//! Query-parameter parsing and condition-tree compilation for an astronomical
//! observation archive.
//!
//! Loosely formatted search form input (single values, `lo .. hi` ranges, radius
//! units, optional fields) is validated and normalized, then compiled into a
//! [`WhereCondition`] tree that an external query engine executes.
//!
//! ```rust
//! use ssda_query::{compile, QueryParameters, TargetParams};
//!
//! let params = QueryParameters {
//!     target: TargetParams {
//!         right_ascension: Some("350 .. 10".into()),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let condition = compile(&params).unwrap();
//! assert_eq!(
//!     condition.to_string(),
//!     "(TRUE AND ((target.ra >= 350 AND target.ra <= 360) OR (target.ra >= 0 AND target.ra <= 10)) AND TRUE)"
//! );
//! ```
pub mod columns;
pub mod compiler;
pub mod constants;
pub mod conversion;
pub mod instruments;
pub mod query_config;
pub mod query_errors;
pub mod query_params;
pub mod target;
pub mod time;
pub mod where_condition;

pub use compiler::{compile, QueryCompiler};
pub use query_config::QueryConfig;
pub use query_errors::QueryError;
pub use query_params::{GeneralParams, InstrumentParams, QueryParameters, TelescopeParams};
pub use target::{resolve_target, TargetParams, TargetPosition, TargetShape};
pub use where_condition::{Value, WhereCondition};

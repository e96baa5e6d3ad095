//! # Query compiler
//!
//! Turns [`QueryParameters`] into a single [`WhereCondition`] tree:
//!
//! ```text
//! AND
//! ├── general    AND(night window?, PI CONTAINS?, proposal code CONTAINS?)
//! ├── target     WITHIN_RADIUS | AND(RA range?, Dec range?)
//! └── telescope  AND(SALT id NOT NULL, instrument condition?) | AND()
//! ```
//!
//! Compilation is a pure, single pass. It either returns the complete tree or the
//! first [`QueryError`]; no partial tree is ever produced.
//!
//! ## Right ascension ranges
//!
//! Right ascension ranges keep their input order. A range with `lo > hi` crosses the
//! 0°/360° seam and is split into two non-wrapping intervals joined by `OR`:
//!
//! ```text
//! 350 .. 10  →  (ra >= 350 AND ra <= 360) OR (ra >= 0 AND ra <= 10)
//! ```
use log::{debug, trace};

use crate::{
    constants::{Degree, MAX_RIGHT_ASCENSION, MIN_RIGHT_ASCENSION},
    conversion::non_blank,
    query_config::QueryConfig,
    query_errors::QueryError,
    query_params::{GeneralParams, InstrumentParams, QueryParameters, TelescopeParams},
    target::{TargetParams, TargetPosition, TargetShape},
    time::observing_night_window,
    where_condition::WhereCondition,
};

/// Compiles search parameters with an injected [`QueryConfig`].
#[derive(Debug, Clone, Default)]
pub struct QueryCompiler {
    config: QueryConfig,
}

impl QueryCompiler {
    pub fn new(config: QueryConfig) -> Self {
        QueryCompiler { config }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Compile the full set of search parameters
    ///
    /// Arguments
    /// ---------
    /// * `params`: general, target and telescope parameters from the search form
    ///
    /// Return
    /// ------
    /// * `AND([general, target, telescope])`, where each part is an empty `AND` if it
    ///   places no constraint
    /// * the first validation error otherwise
    pub fn compile(&self, params: &QueryParameters) -> Result<WhereCondition, QueryError> {
        let condition = WhereCondition::and(vec![
            self.general_condition(&params.general)?,
            self.target_condition(&params.target)?,
            self.telescope_condition(params.telescope.as_ref())?,
        ]);
        trace!("Compiled search condition: {condition}");
        Ok(condition)
    }

    /// Conjunction of the observing night window and the substring matches on
    /// principal investigator and proposal code. Blank fields are skipped.
    pub fn general_condition(&self, general: &GeneralParams) -> Result<WhereCondition, QueryError> {
        let columns = self.config.columns();
        let mut conditions = Vec::new();

        if let Some(night) = non_blank(general.observation_night.as_deref()) {
            let window = observing_night_window(night)?;
            conditions.push(WhereCondition::and(vec![
                WhereCondition::greater_than(&columns.observation_night, window.start),
                WhereCondition::less_than(&columns.observation_night, window.end),
            ]));
        }
        if let Some(pi) = non_blank(general.principal_investigator.as_deref()) {
            conditions.push(WhereCondition::contains(&columns.principal_investigator, pi));
        }
        if let Some(code) = non_blank(general.proposal_code.as_deref()) {
            conditions.push(WhereCondition::contains(&columns.proposal_code, code));
        }

        Ok(WhereCondition::and(conditions))
    }

    /// Resolve the target fields and compile the resulting position.
    pub fn target_condition(&self, target: &TargetParams) -> Result<WhereCondition, QueryError> {
        let position = target.resolve(&self.config)?;
        Ok(self.position_condition(&position))
    }

    pub fn position_condition(&self, position: &TargetPosition) -> WhereCondition {
        let columns = self.config.columns();
        match position.shape() {
            TargetShape::Unconstrained => WhereCondition::and(vec![]),
            TargetShape::Cone {
                right_ascension,
                declination,
                radius,
            } => WhereCondition::within_radius(
                right_ascension,
                declination,
                radius,
                &columns.right_ascension,
                &columns.declination,
            ),
            TargetShape::Ranges {
                right_ascension,
                declination,
            } => {
                let mut conditions = Vec::new();
                if let Some((lo, hi)) = right_ascension {
                    conditions.push(right_ascension_range(&columns.right_ascension, lo, hi));
                }
                if let Some((lo, hi)) = declination {
                    conditions.push(closed_range(&columns.declination, lo, hi));
                }
                WhereCondition::and(conditions)
            }
        }
    }

    /// Telescope-specific condition, dispatching on the instrument for SALT.
    ///
    /// Lesedi, the 1.9 m and unrecognized telescopes add no constraint.
    pub fn telescope_condition(
        &self,
        telescope: Option<&TelescopeParams>,
    ) -> Result<WhereCondition, QueryError> {
        match telescope {
            None => Ok(WhereCondition::and(vec![])),
            Some(TelescopeParams::Salt { instrument }) => {
                let mut conditions =
                    vec![WhereCondition::is_not_null(&self.config.columns().salt_id)];
                conditions.extend(self.salt_instrument_condition(instrument.as_ref())?);
                Ok(WhereCondition::and(conditions))
            }
            Some(other @ (TelescopeParams::Lesedi { .. }
            | TelescopeParams::OneNineMeter { .. }
            | TelescopeParams::Unrecognized)) => {
                debug!("No telescope constraint for {other:?}");
                Ok(WhereCondition::and(vec![]))
            }
        }
    }

    fn salt_instrument_condition(
        &self,
        instrument: Option<&InstrumentParams>,
    ) -> Result<Option<WhereCondition>, QueryError> {
        let columns = self.config.columns();
        let condition = match instrument {
            None => return Ok(None),
            Some(InstrumentParams::Salticam(salticam)) => salticam.condition(&columns.salticam)?,
            Some(InstrumentParams::Rss(rss)) => rss.condition(&columns.rss)?,
            Some(InstrumentParams::Hrs(hrs)) => hrs.condition(&columns.hrs)?,
            Some(InstrumentParams::Bvit(bvit)) => bvit.condition(&columns.bvit),
            Some(
                other @ (InstrumentParams::Hippo(_)
                | InstrumentParams::Shoc(_)
                | InstrumentParams::Spupnic(_)
                | InstrumentParams::Unrecognized),
            ) => {
                debug!("Instrument {other:?} adds no SALT constraint");
                return Ok(None);
            }
        };
        Ok(Some(condition))
    }
}

/// Compile search parameters with the default [`QueryConfig`].
pub fn compile(params: &QueryParameters) -> Result<WhereCondition, QueryError> {
    QueryCompiler::default().compile(params)
}

fn closed_range(column: &str, lo: Degree, hi: Degree) -> WhereCondition {
    WhereCondition::and(vec![
        WhereCondition::greater_equal(column, lo),
        WhereCondition::less_equal(column, hi),
    ])
}

fn right_ascension_range(column: &str, lo: Degree, hi: Degree) -> WhereCondition {
    if lo <= hi {
        closed_range(column, lo, hi)
    } else {
        WhereCondition::or(vec![
            closed_range(column, lo, MAX_RIGHT_ASCENSION),
            closed_range(column, MIN_RIGHT_ASCENSION, hi),
        ])
    }
}

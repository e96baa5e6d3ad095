use serde::Deserialize;

use crate::{
    columns::SalticamColumns, query_errors::QueryError, where_condition::WhereCondition,
};

use super::{
    exposure_time_condition, filter_condition,
    modes::{CodeTable, DetectorMode},
};

/// Search fields of the Salticam imager.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalticamParams {
    pub detector_mode: Option<DetectorMode>,
    pub filter: Option<String>,
    pub exposure_time: Option<String>,
}

impl SalticamParams {
    pub fn condition(&self, columns: &SalticamColumns) -> Result<WhereCondition, QueryError> {
        let mut conditions = vec![WhereCondition::is_not_null(&columns.id)];
        if let Some(mode) = self.detector_mode {
            conditions.push(WhereCondition::equals(&columns.detector_mode, mode.code()));
        }
        conditions.extend(filter_condition(self.filter.as_deref(), &columns.filter));
        conditions.extend(exposure_time_condition(
            self.exposure_time.as_deref(),
            &columns.exposure_time,
        )?);
        Ok(WhereCondition::and(conditions))
    }
}

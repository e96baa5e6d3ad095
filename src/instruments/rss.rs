use serde::Deserialize;

use crate::{columns::RssColumns, query_errors::QueryError, where_condition::WhereCondition};

use super::{
    exposure_time_condition,
    modes::{CodeTable, DetectorMode, RssMode},
};

/// Search fields of the Robert Stobie Spectrograph.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RssParams {
    pub detector_mode: Option<DetectorMode>,
    pub spectroscopic_mode: Option<RssMode>,
    pub exposure_time: Option<String>,
}

impl RssParams {
    pub fn condition(&self, columns: &RssColumns) -> Result<WhereCondition, QueryError> {
        let mut conditions = vec![WhereCondition::is_not_null(&columns.id)];
        if let Some(mode) = self.detector_mode {
            conditions.push(WhereCondition::equals(&columns.detector_mode, mode.code()));
        }
        if let Some(mode) = self.spectroscopic_mode {
            conditions.push(WhereCondition::equals(&columns.mode, mode.code()));
        }
        conditions.extend(exposure_time_condition(
            self.exposure_time.as_deref(),
            &columns.exposure_time,
        )?);
        Ok(WhereCondition::and(conditions))
    }
}

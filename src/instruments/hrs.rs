use serde::Deserialize;

use crate::{columns::HrsColumns, query_errors::QueryError, where_condition::WhereCondition};

use super::{
    exposure_time_condition,
    modes::{CodeTable, HrsMode},
};

/// Search fields of the High Resolution Spectrograph.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HrsParams {
    pub mode: Option<HrsMode>,
    pub exposure_time: Option<String>,
}

impl HrsParams {
    pub fn condition(&self, columns: &HrsColumns) -> Result<WhereCondition, QueryError> {
        let mut conditions = vec![WhereCondition::is_not_null(&columns.id)];
        if let Some(mode) = self.mode {
            conditions.push(WhereCondition::equals(&columns.mode, mode.code()));
        }
        conditions.extend(exposure_time_condition(
            self.exposure_time.as_deref(),
            &columns.exposure_time,
        )?);
        Ok(WhereCondition::and(conditions))
    }
}

#[cfg(test)]
mod hrs_test {
    use super::*;
    use crate::columns::ColumnNames;

    #[test]
    fn test_hrs_mode_uses_abbreviation() {
        let params = HrsParams {
            mode: Some(HrsMode::HighStability),
            exposure_time: Some("1200 .. 1800".into()),
        };
        assert_eq!(
            params.condition(&ColumnNames::default().hrs),
            Ok(WhereCondition::and(vec![
                WhereCondition::is_not_null("hrs.hrs_id"),
                WhereCondition::equals("hrs.hrs_mode", "HS"),
                WhereCondition::and(vec![
                    WhereCondition::greater_equal("hrs.exposure_time", 1200.0),
                    WhereCondition::less_equal("hrs.exposure_time", 1800.0),
                ]),
            ]))
        );
    }
}

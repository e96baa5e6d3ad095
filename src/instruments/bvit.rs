use serde::Deserialize;

use crate::{columns::BvitColumns, where_condition::WhereCondition};

use super::filter_condition;

/// Search fields of the Berkeley Visible Image Tube camera.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BvitParams {
    pub filter: Option<String>,
}

impl BvitParams {
    pub fn condition(&self, columns: &BvitColumns) -> WhereCondition {
        let mut conditions = vec![WhereCondition::is_not_null(&columns.id)];
        conditions.extend(filter_condition(self.filter.as_deref(), &columns.filter));
        WhereCondition::and(conditions)
    }
}

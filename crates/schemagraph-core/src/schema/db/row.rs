use super::Column;

use serde::{Deserialize, Serialize};

/// One row of catalog column metadata, as returned by a schema provider.
///
/// Mirrors the shape of `INFORMATION_SCHEMA.COLUMNS`: each row names the
/// entity it belongs to along with the column's properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub entity: String,
    pub column: String,
    pub data_type: String,
    pub length: Option<i32>,
    pub nullable: bool,
    pub default_value: Option<String>,
    pub ordinal_position: u32,
}

impl CatalogRow {
    pub(crate) fn to_column(&self) -> Column {
        Column {
            name: self.column.clone(),
            data_type: self.data_type.clone(),
            length: self.length,
            nullable: self.nullable,
            default_value: self.default_value.clone(),
            ordinal_position: self.ordinal_position,
        }
    }
}

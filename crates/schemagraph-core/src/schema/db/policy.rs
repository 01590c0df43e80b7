use super::Entity;

/// Audit columns maintained by the database; inserts never set them. The
/// primary key is excluded too, per entity.
pub const NON_INSERTABLE_COMMON_COLUMNS: &[&str] = &[
    "createdByUserID",
    "createdDate",
    "updatedByUserID",
    "updatedDate",
    "deletedByUserID",
    "deletedDate",
    "deleted",
    "currentHistoryID",
];

/// Audit columns updates never set. Unlike inserts, `deleted` stays writable
/// so records can be soft-deleted through an update.
pub const NON_UPDATABLE_COMMON_COLUMNS: &[&str] = &[
    "createdByUserID",
    "createdDate",
    "updatedByUserID",
    "updatedDate",
    "deletedByUserID",
    "deletedDate",
    "currentHistoryID",
];

const CURRENT_HISTORY_COLUMN: &str = "currentHistoryID";

impl Entity {
    /// Columns an insert into this entity must not set.
    pub fn non_insertable_columns(&self) -> Vec<&str> {
        self.with_primary_key(NON_INSERTABLE_COMMON_COLUMNS)
    }

    /// Columns an update of this entity must not set.
    pub fn non_updatable_columns(&self) -> Vec<&str> {
        self.with_primary_key(NON_UPDATABLE_COMMON_COLUMNS)
    }

    /// True if rows of this entity keep a history trail.
    pub fn is_history_tracked(&self) -> bool {
        self.contains(CURRENT_HISTORY_COLUMN)
    }

    fn with_primary_key<'a>(&'a self, common: &[&'a str]) -> Vec<&'a str> {
        let mut columns = common.to_vec();
        columns.extend(self.primary_key_name());
        columns
    }
}

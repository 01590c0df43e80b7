/// Configuration shared by schema loading, relationship inference and
/// projection resolution.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix carried by every table name, e.g. `apiStores`.
    pub table_prefix: String,

    /// Prefix carried by every view name, e.g. `apiViewStores`.
    pub view_prefix: String,

    /// Emit per-column and per-field diagnostics while inferring
    /// relationships and resolving projections.
    pub verbose: bool,

    /// Columns every table and view must carry.
    pub mandatory_columns: Vec<MandatoryColumn>,

    /// Field names no column may use; they collide with query arguments.
    pub reserved_names: Vec<String>,

    /// Key under which plural queries nest their rows.
    pub page_key: String,
}

/// A column every entity must define, with its expected storage type and
/// nullability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandatoryColumn {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
}

impl MandatoryColumn {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_prefix: "api".to_string(),
            view_prefix: "apiView".to_string(),
            verbose: false,
            mandatory_columns: vec![
                MandatoryColumn::new("createdByUserID", "int", false),
                MandatoryColumn::new("createdDate", "datetime", false),
                MandatoryColumn::new("updatedByUserID", "int", true),
                MandatoryColumn::new("updatedDate", "datetime", true),
                MandatoryColumn::new("deletedByUserID", "int", true),
                MandatoryColumn::new("deletedDate", "datetime", true),
                MandatoryColumn::new("deleted", "bit", false),
            ],
            reserved_names: vec!["sort".to_string(), "pagination".to_string()],
            page_key: "data".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table name prefix
    pub fn table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    /// Set the view name prefix
    pub fn view_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.view_prefix = prefix.into();
        self
    }

    /// Enable or disable verbose diagnostics
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Replace the mandatory column list
    pub fn mandatory_columns(mut self, columns: Vec<MandatoryColumn>) -> Self {
        self.mandatory_columns = columns;
        self
    }

    /// Replace the reserved field names
    pub fn reserved_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the key plural queries nest their rows under
    pub fn page_key(mut self, key: impl Into<String>) -> Self {
        self.page_key = key.into();
        self
    }
}

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The storage type as reported by the catalog, e.g. `nvarchar`.
    pub data_type: String,

    /// Maximum character length, for character types.
    pub length: Option<i32>,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// The column default expression, if any.
    pub default_value: Option<String>,

    /// 1-based physical position of the column. The column at position 1 is
    /// the entity's primary identifier.
    pub ordinal_position: u32,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>, ordinal_position: u32) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            length: None,
            nullable: false,
            default_value: None,
            ordinal_position,
        }
    }

    pub fn length(mut self, length: i32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// True if this column is the entity's primary identifier.
    pub fn is_primary_key(&self) -> bool {
        self.ordinal_position == 1
    }

    /// True if an insert must supply a value for this column. Only meaningful
    /// for table columns.
    pub fn required_in_db(&self) -> bool {
        !self.nullable && self.default_value.is_none()
    }
}

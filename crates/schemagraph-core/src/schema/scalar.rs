use serde::Serialize;

/// Logical scalar kinds exposed to API schema builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScalarType {
    Boolean,
    Int,
    Float,
    String,
    Date,
    DateTime,
}

impl ScalarType {
    /// Maps a catalog storage type to its logical scalar kind.
    ///
    /// Unmapped types return `None` and are reported; whether that is fatal
    /// is up to the caller.
    pub fn from_db_type(data_type: &str) -> Option<ScalarType> {
        let ty = match data_type {
            "int" | "tinyint" => ScalarType::Int,
            "nvarchar" => ScalarType::String,
            "datetime" => ScalarType::DateTime,
            "decimal" => ScalarType::Float,
            "bit" => ScalarType::Boolean,
            "date" => ScalarType::Date,
            _ => {
                tracing::warn!(data_type, "no scalar mapping for storage type");
                return None;
            }
        };

        Some(ty)
    }
}

use super::Error;

/// Error when a loaded catalog does not satisfy the schema conventions.
///
/// This occurs when:
/// - A table or view is missing a mandatory column
/// - A mandatory column has the wrong type or nullability
/// - A column uses a reserved field name
/// - A table column uses `varchar` instead of `nvarchar`
#[derive(Debug)]
pub(super) struct InvalidSchemaError {
    message: Box<str>,
}

impl std::error::Error for InvalidSchemaError {}

impl core::fmt::Display for InvalidSchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchemaError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}

use super::Error;

/// Error when a physical entity name does not carry the prefix expected for
/// its kind.
///
/// Only the single translation fails; inference over the remaining entities
/// carries on.
#[derive(Debug)]
pub(super) struct InvalidNameError {
    name: Box<str>,
    expected_prefix: Box<str>,
}

impl std::error::Error for InvalidNameError {}

impl core::fmt::Display for InvalidNameError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid entity name `{}`: expected prefix `{}`",
            self.name, self.expected_prefix
        )
    }
}

impl Error {
    /// Creates an invalid name error for `name`, which should have started
    /// with `expected_prefix`.
    pub fn invalid_name(name: impl Into<String>, expected_prefix: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidName(InvalidNameError {
            name: name.into().into(),
            expected_prefix: expected_prefix.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid name error.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidName(_))
    }
}

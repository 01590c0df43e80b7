/// Error built from a free-form message via [`err!`](crate::err) or
/// [`bail!`](crate::bail).
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    pub(super) fn new(message: impl Into<String>) -> Self {
        AdhocError {
            message: message.into().into(),
        }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

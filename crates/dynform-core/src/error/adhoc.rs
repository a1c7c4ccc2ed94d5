use super::Error;

/// Error built from a free-form message with [`err!`](crate::err) or
/// [`bail!`](crate::bail).
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    pub(super) fn new(message: Box<str>) -> Self {
        AdhocError { message }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an error from format arguments.
    ///
    /// Prefer the [`err!`](crate::err) macro over calling this directly.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        let message = match args.as_str() {
            Some(message) => message.into(),
            None => args.to_string().into(),
        };
        Error::from(super::ErrorKind::Adhoc(AdhocError::new(message)))
    }

    /// Creates an error from a message.
    pub fn msg(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Adhoc(AdhocError::new(
            message.into().into(),
        )))
    }
}

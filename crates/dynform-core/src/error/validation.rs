use super::Error;

/// Error when a schema is not fit to be filled in.
#[derive(Debug)]
pub(super) struct ValidationError {
    pub(super) kind: ValidationErrorKind,
}

#[derive(Debug)]
pub(super) enum ValidationErrorKind {
    /// A field has no name; its input would never reach the record.
    EmptyName { position: usize },

    /// Two fields share a name; the later one wins on submit.
    DuplicateName { name: Box<str> },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("invalid schema: ")?;
        match &self.kind {
            ValidationErrorKind::EmptyName { position } => {
                write!(f, "field #{} has an empty name", position)
            }
            ValidationErrorKind::DuplicateName { name } => {
                write!(f, "field name `{}` is used more than once", name)
            }
        }
    }
}

impl Error {
    /// Creates a validation error for an unnamed field. `position` is 1-based.
    pub fn validation_empty_name(position: usize) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::EmptyName { position },
        }))
    }

    /// Creates a validation error for a name shared by several fields.
    pub fn validation_duplicate_name(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            kind: ValidationErrorKind::DuplicateName {
                name: name.into().into(),
            },
        }))
    }

    /// Returns `true` if this error is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }
}

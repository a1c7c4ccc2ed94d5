use super::Error;

/// What a failed create call was trying to store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistenceTarget {
    /// A template built in design mode.
    Template,
    /// A record submitted from a filled form.
    Record,
}

impl core::fmt::Display for PersistenceTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            PersistenceTarget::Template => f.write_str("template"),
            PersistenceTarget::Record => f.write_str("record"),
        }
    }
}

/// Error when creating a template or a submitted record fails.
#[derive(Debug)]
pub(super) struct PersistenceError {
    target: PersistenceTarget,
}

impl std::error::Error for PersistenceError {}

impl core::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to create {}", self.target)
    }
}

impl Error {
    /// Creates a persistence error. Chain it onto the underlying failure with
    /// [`Error::context`].
    pub fn persistence(target: PersistenceTarget) -> Error {
        Error::from(super::ErrorKind::Persistence(PersistenceError { target }))
    }

    /// Returns `true` if this error is a persistence error.
    pub fn is_persistence(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Persistence(_))
    }

    /// The target of a persistence error.
    pub fn persistence_target(&self) -> Option<PersistenceTarget> {
        match self.kind() {
            super::ErrorKind::Persistence(err) => Some(err.target),
            _ => None,
        }
    }
}

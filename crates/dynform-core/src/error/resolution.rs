use super::Error;

/// The step of the item → template lookup that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionStage {
    /// The host context carries no item reference.
    MissingItemReference,

    /// The host item could not be fetched.
    FetchItem,

    /// The host item has no usable template id.
    TemplateId,

    /// The template could not be fetched.
    FetchTemplate,

    /// The template's `fields` could not be read as a schema.
    Fields,
}

impl core::fmt::Display for ResolutionStage {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(match self {
            ResolutionStage::MissingItemReference => "because the host supplied no item reference",
            ResolutionStage::FetchItem => "while fetching the host item",
            ResolutionStage::TemplateId => "while reading the template id",
            ResolutionStage::FetchTemplate => "while fetching the template",
            ResolutionStage::Fields => "while reading the template fields",
        })
    }
}

/// Error when the template lookup chain for a form fails.
#[derive(Debug)]
pub(super) struct ResolutionError {
    stage: ResolutionStage,
    message: Box<str>,
}

impl std::error::Error for ResolutionError {}

impl core::fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "template resolution failed {}", self.stage)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a resolution error for the given stage.
    pub fn resolution(stage: ResolutionStage, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Resolution(ResolutionError {
            stage,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a resolution error.
    pub fn is_resolution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Resolution(_))
    }

    /// The failed stage of a resolution error.
    pub fn resolution_stage(&self) -> Option<ResolutionStage> {
        match self.kind() {
            super::ErrorKind::Resolution(err) => Some(err.stage),
            _ => None,
        }
    }
}

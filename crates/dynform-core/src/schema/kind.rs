use std::fmt;

/// The kind of input a field collects.
///
/// The set of kinds is open: tags other than `text` and `choice` are kept
/// verbatim in [`FieldKind::Other`] so a template written by a newer designer
/// still round-trips. Anything that is not [`FieldKind::Text`] renders as a
/// selection control.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single-line free text.
    Text,

    /// One value out of the field's options.
    Choice,

    /// A kind this version does not know about.
    Other(String),
}

impl FieldKind {
    pub const TEXT: &'static str = "text";
    pub const CHOICE: &'static str = "choice";

    pub fn from_tag(tag: &str) -> FieldKind {
        match tag {
            Self::TEXT => FieldKind::Text,
            Self::CHOICE => FieldKind::Choice,
            other => FieldKind::Other(other.to_string()),
        }
    }

    /// The tag stored in templates.
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => Self::TEXT,
            FieldKind::Choice => Self::CHOICE,
            FieldKind::Other(tag) => tag,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, FieldKind::Text)
    }

    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::Choice)
    }

    /// Whether options are edited for this kind while designing.
    pub fn has_options(&self) -> bool {
        self.is_choice()
    }
}

impl From<&str> for FieldKind {
    fn from(tag: &str) -> Self {
        FieldKind::from_tag(tag)
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            Self::TEXT => FieldKind::Text,
            Self::CHOICE => FieldKind::Choice,
            _ => FieldKind::Other(tag),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
